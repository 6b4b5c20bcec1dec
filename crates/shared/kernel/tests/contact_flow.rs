use foh_domain::config::TimingConfig;
use foh_domain::contact::{ContactField, ContactInput, NAME_TOO_SHORT, SEND_FAILED};
use foh_kernel::contact::{ContactFlow, FormSession, FormState, SimulatedSubmitter};
use foh_kernel::store::UiState;
use std::time::Duration;

fn open_form() -> UiState {
    let mut state = UiState::new(9);
    state.toggle_contact_form(Some(true));
    state
}

#[tokio::test(start_paused = true)]
async fn short_name_is_rejected_and_form_stays_open() {
    let state = open_form();
    let flow = ContactFlow::simulated(&TimingConfig::default());

    let started = tokio::time::Instant::now();
    let result = flow.submit(ContactInput::new("A", "jane@example.com", "")).await;

    assert_eq!(result.field_error(ContactField::Name), Some(NAME_TOO_SHORT));
    assert_eq!(started.elapsed(), Duration::ZERO, "invalid input must not reach the submitter");
    assert!(state.is_contact_form_open());
}

#[tokio::test(start_paused = true)]
async fn valid_submission_succeeds_then_closes_after_delay() {
    let mut state = open_form();
    let flow = ContactFlow::simulated(&TimingConfig::default());

    let started = tokio::time::Instant::now();
    let result = flow.submit(ContactInput::new("Jane", "jane@example.com", "Festival in May")).await;
    assert!(result.is_success(), "unexpected state: {result:?}");
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(1500) && elapsed < Duration::from_millis(1600));
    assert!(state.is_contact_form_open(), "success panel shows before closing");

    flow.close_after_success(|| {
        state.toggle_contact_form(Some(false));
    })
    .await;

    assert!(started.elapsed() >= Duration::from_millis(3500));
    assert!(!state.is_contact_form_open());
    assert_eq!(state.active_modal(), None);
}

#[tokio::test(start_paused = true)]
async fn delivery_failure_reports_retry_message() {
    let state = open_form();
    let flow = ContactFlow::new(
        SimulatedSubmitter::new(Duration::from_millis(10)).failing(),
        Duration::from_secs(2),
    );

    let result = flow.submit(ContactInput::new("Jane", "jane@example.com", "")).await;

    assert_eq!(result, FormState::Failed(SEND_FAILED.to_owned()));
    assert_eq!(result.message(), Some(SEND_FAILED));
    assert!(state.is_contact_form_open());
}

#[tokio::test(start_paused = true)]
async fn receipts_are_unique() {
    let flow = ContactFlow::simulated(&TimingConfig::default());
    let input = ContactInput::new("Jane", "jane@example.com", "");

    let (FormState::Succeeded(a), FormState::Succeeded(b)) =
        (flow.submit(input.clone()).await, flow.submit(input).await)
    else {
        panic!("both submissions should succeed");
    };
    assert_ne!(a.id, b.id);
    assert_eq!(a.id.len(), 12);
}

#[tokio::test(start_paused = true)]
async fn reopening_while_pending_discards_the_old_outcome() {
    let mut state = open_form();
    let mut session = FormSession::default();
    session.restart();
    let flow = ContactFlow::simulated(&TimingConfig::default());

    let ticket = session.begin().expect("fresh form accepts a submission");
    let (outcome, ()) = tokio::join!(
        flow.submit(ContactInput::new("Jane", "jane@example.com", "")),
        async {
            // Closed and reopened before the simulated delay ends.
            tokio::time::sleep(Duration::from_millis(500)).await;
            state.toggle_contact_form(Some(false));
            session.restart();
            state.toggle_contact_form(Some(true));
            session.restart();
        },
    );

    assert!(outcome.is_success());
    assert!(!session.finish(ticket, outcome));
    assert_eq!(session.state(), &FormState::Idle);

    flow.close_after_success(|| {
        if session.shows_success(ticket) {
            state.toggle_contact_form(Some(false));
        }
    })
    .await;
    assert!(state.is_contact_form_open(), "the reopened form stays open");
}

#[tokio::test(start_paused = true)]
async fn finished_session_closes_after_delay() {
    let mut state = open_form();
    let mut session = FormSession::default();
    session.restart();
    let flow = ContactFlow::simulated(&TimingConfig::default());

    let ticket = session.begin().expect("fresh form accepts a submission");
    let outcome = flow.submit(ContactInput::new("Jane", "jane@example.com", "")).await;
    assert!(session.finish(ticket, outcome));

    flow.close_after_success(|| {
        if session.shows_success(ticket) {
            state.toggle_contact_form(Some(false));
        }
    })
    .await;
    assert!(!state.is_contact_form_open());
}
