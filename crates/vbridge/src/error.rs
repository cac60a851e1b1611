use std::borrow::Cow;

/// Errors raised while describing a module.
#[vbridge_derive::bridge_error]
pub enum ModuleError {
    #[code = "ERR_MODULE_DESCRIPTOR"]
    #[error("Invalid module descriptor{}: {message}", format_context(.context))]
    InvalidDescriptor { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
