#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros used across the site workspace.
//! Right now this is a single attribute, [`foh_error`], which turns a plain enum into
//! a `thiserror` error with context support.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! foh-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait adding `.context(...)` to
///   `Result<T, Name>` and to `Result<T, Source>` for every wrapped source type.
/// * **Conversions**: `From<Source>` for variants holding a `source` field (or a field tagged
///   `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * **Formatting**: A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The item must be an **enum** with **named-field** variants.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants carrying a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use foh_derive::foh_error;
/// use std::borrow::Cow;
///
/// #[foh_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<String, StoreError> {
///     std::fs::read_to_string(path).context("Reading theme record")
/// }
/// ```
#[proc_macro_attribute]
pub fn foh_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
