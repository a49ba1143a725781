#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros used across the locus workspace.
//!
//! Only one macro lives here today: [`macro@locus_error`], which turns a plain enum into
//! the error type convention every slice follows (context strings, `?`-friendly
//! conversions, a `...Ext` trait).

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring a crate's error enum.
///
/// # Features
///
/// * **Derives**: adds `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context**: generates a `<ErrorName>Ext` trait with `.context(..)` for
///   `Result<T, ErrorName>` and for `Result<T, Source>` of every wrapped source error.
/// * **Conversions**: `From<Source>` for every variant holding a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal fallback**: `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
/// * **Formatting**: a private `format_context` helper usable from `#[error(..)]` strings.
///
/// # Requirements
///
/// 1. Applied to an **enum** with named-field variants only.
/// 2. A `context` field, where present, must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping a source error must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[locus_derive::locus_error]
/// pub enum LookupError {
///     #[error("HTTP transport failure{}: {source}", format_context(.context))]
///     Http { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal lookup error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// async fn fetch(client: &reqwest::Client) -> Result<String, LookupError> {
///     let body = client.get("https://example.org").send().await.context("GET example")?;
///     body.text().await.context("Reading body")
/// }
/// ```
#[proc_macro_attribute]
pub fn locus_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
