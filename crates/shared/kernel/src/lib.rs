//! Site behaviour shared by every front end.
//! Keep this crate free of UI framework types: views call into it, never the other way round.
//!
//! ## Modules
//! - [`store`]: the session's UI state and its persisted snapshot.
//! - [`carousel`]: timed feature rotation.
//! - [`contact`]: notify-form validation and the simulated submission.
//! - [`persistence`]: theme load/save boundary.
//! - [`seo`]: document metadata.
//! - [`config`]: layered config loading (non-wasm).
//!
//! ## ID generation
//! Use `safe_nanoid!` for URL-safe, unambiguous IDs:
//! ```rust
//! # use foh_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
pub mod carousel;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod contact;
pub mod persistence;
pub mod prelude;
pub mod seo;
pub mod store;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use foh_domain as domain;
pub use nanoid::nanoid;

/// Generates an unambiguous `NanoID` (no visually confusing characters).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
