mod button;
mod form_input;
mod form_textarea;

pub use button::{Button, ButtonSize, ButtonVariant, button_class};
pub use form_input::{FormInput, field_class};
pub use form_textarea::FormTextarea;
