use foh_domain::constants::{CONTACT_MODAL_ID, PERSISTENCE_KEY};
use foh_domain::contact::{CHECK_FIELDS, EMAIL_INVALID, NAME_TOO_SHORT, SEND_FAILED};

#[test]
fn storage_key_is_stable() {
    assert_eq!(PERSISTENCE_KEY, "foh-pro-ui-store");
    assert_eq!(CONTACT_MODAL_ID, "contact");
}

#[test]
fn form_messages_match_copy() {
    assert_eq!(NAME_TOO_SHORT, "Name must be at least 2 characters");
    assert_eq!(EMAIL_INVALID, "Please enter a valid email address");
    assert_eq!(CHECK_FIELDS, "Please check form fields");
    assert_eq!(SEND_FAILED, "Failed to send. Please try again.");
}
