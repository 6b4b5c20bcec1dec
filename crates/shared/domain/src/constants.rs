/// Key under which the persisted UI record is stored.
pub const PERSISTENCE_KEY: &str = "foh-pro-ui-store";

/// Modal id used while the notify form is open.
pub const CONTACT_MODAL_ID: &str = "contact";

/// Delay between automatic carousel advances.
pub const CAROUSEL_INTERVAL_MS: u64 = 5_000;
/// Simulated round trip of a contact submission.
pub const SUBMIT_DELAY_MS: u64 = 1_500;
/// How long the success panel stays up before the form closes.
pub const CLOSE_DELAY_MS: u64 = 2_000;

pub const HERO_BLURB: &str = "We're working on something special. Stay tuned for our cutting-edge event production platform launching soon.";
pub const CTA_LABEL: &str = "Get Notified When We Launch";
pub const FORM_SUBTITLE: &str = "Be the first to know when our platform goes live";
pub const FORM_SUBMIT_LABEL: &str = "Notify Me";
pub const SUCCESS_TITLE: &str = "Thanks for subscribing!";
pub const SUCCESS_BODY: &str = "We'll notify you as soon as we launch.";
pub const MESSAGE_PLACEHOLDER: &str =
    "Tell us what you're looking for in an event production platform...";

pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap";
