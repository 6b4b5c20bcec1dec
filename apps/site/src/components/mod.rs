//! Page sections. Each one pulls what it needs from context; none take data props.

mod contact;
mod features;
mod footer;
mod hero;
pub mod ui;

pub use contact::ContactForm;
pub use features::FeatureHighlights;
pub use footer::Footer;
pub use hero::HeroContent;
