//! Common imports for view code.

pub use crate::carousel::Carousel;
pub use crate::contact::{
    ContactFlow, ContactSubmitter, FormSession, FormState, SessionTicket, SimulatedSubmitter,
};
pub use crate::persistence::{FileThemeStore, MemoryThemeStore, ThemeStore, load_theme};
pub use crate::seo::Metadata;
pub use crate::store::{UiSnapshot, UiState};
pub use foh_domain::config::AppConfig;
pub use foh_domain::contact::{ContactField, ContactInput};
pub use foh_domain::site::{Feature, SiteConfig};
pub use foh_domain::theme::{Appearance, Theme};
