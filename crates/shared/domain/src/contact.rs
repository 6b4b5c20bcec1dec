use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const CHECK_FIELDS: &str = "Please check form fields";
pub const SEND_FAILED: &str = "Failed to send. Please try again.";

/// Minimum number of characters in a name.
pub const NAME_MIN_CHARS: usize = 2;

/// What a visitor typed into the notify form. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: Option<String>,
}

impl ContactInput {
    /// Builds an input from raw field values. Name and email are trimmed; a blank
    /// message becomes `None`.
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() { None } else { Some(message) };
        Self { name: name.into().trim().to_owned(), email: email.into().trim().to_owned(), message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Matches the `id`/`name` attribute of the rendered input.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message (Optional)",
        }
    }
}

/// Per-field validation messages, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<ContactField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.id())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_is_dropped() {
        assert_eq!(ContactInput::new("Jane", "jane@example.com", "   ").message, None);
        assert_eq!(
            ContactInput::new("Jane", "jane@example.com", "hi").message.as_deref(),
            Some("hi")
        );
    }

    #[test]
    fn name_and_email_are_trimmed_once() {
        let input = ContactInput::new("  Jane Doe ", "\tjane@example.com \n", " keep spacing ");
        assert_eq!(input.name, "Jane Doe");
        assert_eq!(input.email, "jane@example.com");
        assert_eq!(input.message.as_deref(), Some(" keep spacing "));
    }

    #[test]
    fn field_errors_display_in_field_order() {
        let mut errors = FieldErrors::default();
        errors.insert(ContactField::Email, EMAIL_INVALID);
        errors.insert(ContactField::Name, NAME_TOO_SHORT);

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "name: Name must be at least 2 characters; email: Please enter a valid email address"
        );
    }
}
