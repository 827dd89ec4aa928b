#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Course Studio crates.
//!
//! Only one macro lives here today: [`macro@cstudio_error`], which turns a plain enum into
//! the workspace's standard error type.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! cstudio-derive = { path = "../../infra/derive" }
//! thiserror = "2"
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<ErrorName>Ext` trait that adds `.context()`
///   to `Result<T, ErrorName>` and to `Result<T, SourceError>` for every wrapped source.
/// * **Standard Conversions**: Implements `From<SourceError>` for variants with a `source`
///   field (or a field marked `#[source]`/`#[from]`), enabling `?` on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
/// * **Formatting helper**: A module-local `format_context` function for use inside
///   `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping a source error must carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use cstudio_derive::cstudio_error;
/// use std::borrow::Cow;
///
/// #[cstudio_error]
/// pub enum CatalogError {
///     #[error("Catalog file error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, CatalogError> {
///     std::fs::read_to_string(path).context("Reading catalog")
/// }
/// ```
#[proc_macro_attribute]
pub fn cstudio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
