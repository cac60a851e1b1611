#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the bridge workspace.
//! This crate removes the boilerplate around coded error enums and native element types.
//!
//! ## Usage
//! Generated code refers to `::vbridge_domain` and `::thiserror`, so consuming crates must
//! depend on both:
//! ```toml
//! [dependencies]
//! vbridge-derive.workspace = true
//! vbridge-domain.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// A high-level attribute macro for defining coded error enums.
///
/// This macro transforms a standard enum into an error type that can cross the module
/// boundary as a `CodedError`.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Error Codes**: Every variant carries `#[code = "ERR_..."]`; the macro implements
///   `vbridge_domain::coded::Coded` so `code()` returns the variant's code.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `#[source]` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&str>` and `From<String>` implementations
///   if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant has a unique, non-empty `#[code = "..."]`.
/// 3. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 4. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]` (compatible with `thiserror`), plus a context field.
/// 5. Tuple or unit variants are rejected to keep error wiring explicit.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[vbridge_derive::bridge_error]
/// pub enum ConfigError {
///     #[code = "ERR_CONFIG"]
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[code = "ERR_INTERNAL"]
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// assert_eq!(ConfigError::from("oops").code(), "ERR_INTERNAL");
/// ```
#[proc_macro_attribute]
pub fn bridge_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Derives `vbridge_domain::element::Element` for a native element type.
///
/// The type must be `'static + Debug + Send + Sync`.
///
/// # Example
/// ```rust,ignore
/// #[derive(Debug, vbridge_derive::Element)]
/// pub struct StackView {
///     children: Vec<vbridge_domain::element::ElementRef>,
/// }
/// ```
#[proc_macro_derive(Element)]
pub fn derive_element(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::element::expand_element(input).into()
}
