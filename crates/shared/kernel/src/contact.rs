//! Notify-form validation and the simulated submission.
//!
//! There is no backend: [`SimulatedSubmitter`] waits for a configured delay and
//! hands back a [`Receipt`]. [`ContactFlow`] ties validation, submission and the
//! delayed close together so the view only maps a [`FormState`] to markup.

use crate::safe_nanoid;
use foh_domain::config::TimingConfig;
use foh_domain::contact::{
    CHECK_FIELDS, ContactField, ContactInput, EMAIL_INVALID, FieldErrors, NAME_MIN_CHARS,
    NAME_TOO_SHORT, SEND_FAILED,
};
use regex::Regex;
use std::borrow::Cow;
use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, info, warn};

// Local part, '@', one or more dotted labels, alphabetic TLD.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

#[foh_derive::foh_error]
pub enum ContactError {
    #[error("Contact delivery failed{}: {message}", format_context(.context))]
    Delivery { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal contact error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Syntactic address check; no DNS, no deliverability. Surrounding whitespace fails.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

/// Checks the input against the form rules.
///
/// # Errors
/// Returns every failing field with its message.
pub fn validate(input: &ContactInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if input.name.trim().chars().count() < NAME_MIN_CHARS {
        errors.insert(ContactField::Name, NAME_TOO_SHORT);
    }
    if !is_valid_email(&input.email) {
        errors.insert(ContactField::Email, EMAIL_INVALID);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Proof of a finished submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub id: String,
}

/// Something that can deliver a contact request.
pub trait ContactSubmitter: Send + Sync {
    fn submit(
        &self,
        input: ContactInput,
    ) -> impl Future<Output = Result<Receipt, ContactError>> + Send;
}

/// Stand-in for a remote call: sleeps, logs, then succeeds (or fails when told to).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    delay: Duration,
    fail: bool,
}

impl SimulatedSubmitter {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    #[must_use]
    pub const fn from_config(timing: &TimingConfig) -> Self {
        Self::new(timing.submit_delay())
    }

    /// Every submission fails after the delay.
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(
        &self,
        input: ContactInput,
    ) -> impl Future<Output = Result<Receipt, ContactError>> + Send {
        let Self { delay, fail } = *self;

        async move {
            tokio::time::sleep(delay).await;

            if fail {
                return Err(ContactError::Delivery {
                    message: "simulated outage".into(),
                    context: Some(format!("submitting for {}", input.name).into()),
                });
            }

            let receipt = Receipt { id: safe_nanoid!() };
            info!(
                receipt = %receipt.id,
                name = %input.name,
                email = %input.email,
                has_message = input.message.is_some(),
                "Contact form submitted"
            );
            Ok(receipt)
        }
    }
}

/// What the form shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Pending,
    Invalid(FieldErrors),
    Succeeded(Receipt),
    Failed(String),
}

impl FormState {
    /// Form-level banner text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(_) => Some(CHECK_FIELDS),
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn field_error(&self, field: ContactField) -> Option<&str> {
        match self {
            Self::Invalid(errors) => errors.get(field),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

/// Ties a submission to the opening of the form it started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTicket(u64);

/// Form state for one opening of the modal.
///
/// Opening or closing the form calls [`FormSession::restart`]. An outcome that arrives
/// for an older session is dropped, so a reopened form never shows a result it did not send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    generation: u64,
    state: FormState,
}

impl FormSession {
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Starts a blank session; in-flight submissions of the previous one become stale.
    pub fn restart(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = FormState::Idle;
    }

    /// Marks the form pending. `None` while a submission is already running.
    pub fn begin(&mut self) -> Option<SessionTicket> {
        if self.state.is_pending() {
            return None;
        }
        self.state = FormState::Pending;
        Some(SessionTicket(self.generation))
    }

    /// Applies `outcome` if `ticket` belongs to this session. Returns whether it did.
    pub fn finish(&mut self, ticket: SessionTicket, outcome: FormState) -> bool {
        if ticket.0 != self.generation {
            debug!(?outcome, "Dropping outcome of a closed form session");
            return false;
        }
        self.state = outcome;
        true
    }

    /// True while the success panel of `ticket`'s session is showing.
    #[must_use]
    pub const fn shows_success(&self, ticket: SessionTicket) -> bool {
        ticket.0 == self.generation && self.state.is_success()
    }
}

/// Validation + submission + delayed close for one form.
#[derive(Debug, Clone)]
pub struct ContactFlow<S> {
    submitter: S,
    close_delay: Duration,
}

impl<S: ContactSubmitter> ContactFlow<S> {
    pub const fn new(submitter: S, close_delay: Duration) -> Self {
        Self { submitter, close_delay }
    }

    pub const fn close_delay(&self) -> Duration {
        self.close_delay
    }

    /// Runs one submission. Invalid input never reaches the submitter.
    pub async fn submit(&self, input: ContactInput) -> FormState {
        if let Err(errors) = validate(&input) {
            debug!(%errors, "Contact form rejected");
            return FormState::Invalid(errors);
        }

        match self.submitter.submit(input).await {
            Ok(receipt) => FormState::Succeeded(receipt),
            Err(err) => {
                warn!(error = %err, "Contact form submission failed");
                FormState::Failed(SEND_FAILED.to_owned())
            },
        }
    }

    /// Waits out the success panel, then runs `close`.
    pub async fn close_after_success<F>(&self, close: F)
    where
        F: FnOnce(),
    {
        tokio::time::sleep(self.close_delay).await;
        close();
    }
}

impl ContactFlow<SimulatedSubmitter> {
    #[must_use]
    pub const fn simulated(timing: &TimingConfig) -> Self {
        Self::new(SimulatedSubmitter::from_config(timing), timing.close_delay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        for email in ["jane@example.com", "j.doe+events@mail.foh-pro.com", "a_b@x.io"] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "jane", "jane@", "@example.com", "jane@example", "ja ne@example.com", ".jane@example.com", "jane..doe@example.com", "jane@example.c"] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn surrounding_whitespace_is_not_an_address() {
        assert!(!is_valid_email(" jane@example.com "));
        let input = ContactInput::new(" Jane ", " jane@example.com ", "");
        assert!(validate(&input).is_ok());
        assert_eq!(input.email, "jane@example.com");
    }

    #[test]
    fn session_ignores_double_submit() {
        let mut session = FormSession::default();
        session.restart();
        let ticket = session.begin().expect("idle form accepts a submission");
        assert!(session.begin().is_none());

        assert!(session.finish(ticket, FormState::Succeeded(Receipt { id: "r".to_owned() })));
        assert!(session.shows_success(ticket));
    }

    #[test]
    fn session_drops_outcome_after_restart() {
        let mut session = FormSession::default();
        let ticket = session.begin().expect("idle form accepts a submission");
        session.restart();

        assert!(!session.finish(ticket, FormState::Failed(SEND_FAILED.to_owned())));
        assert_eq!(session.state(), &FormState::Idle);
        assert!(session.begin().is_some());
    }

    #[test]
    fn short_name_is_rejected() {
        let errors = validate(&ContactInput::new("A", "jane@example.com", "")).unwrap_err();
        assert_eq!(errors.get(ContactField::Name), Some(NAME_TOO_SHORT));
        assert_eq!(errors.get(ContactField::Email), None);
    }

    #[test]
    fn both_fields_reported_together() {
        let errors = validate(&ContactInput::new(" ", "nope", "")).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn name_counts_characters_not_bytes() {
        assert!(validate(&ContactInput::new("Zoë", "zoe@example.com", "")).is_ok());
        assert!(validate(&ContactInput::new("é", "zoe@example.com", "")).is_err());
    }

    #[test]
    fn form_state_messages() {
        assert_eq!(FormState::Idle.message(), None);
        assert_eq!(FormState::Invalid(FieldErrors::default()).message(), Some(CHECK_FIELDS));
        assert_eq!(FormState::Failed(SEND_FAILED.to_owned()).message(), Some(SEND_FAILED));
        assert!(FormState::Pending.is_pending());
    }
}
