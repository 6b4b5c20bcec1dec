//! # Domain Models
//!
//! Pure data for the coming-soon site: company copy, the feature list, theme
//! preferences, animation curves and contact-form input.
//! Keep it lean: `serde` only, no I/O, no UI framework types.

pub mod config;
pub mod constants;
pub mod contact;
pub mod motion;
pub mod site;
pub mod theme;
