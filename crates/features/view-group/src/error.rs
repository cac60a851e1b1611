use std::borrow::Cow;
use strum_macros::{Display, IntoStaticStr};
use vbridge_domain::action::ActionKind;

/// Which argument of an action failed the type check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Operand {
    Container,
    Child,
}

/// Dispatch contract violations.
#[vbridge_derive::bridge_error]
pub enum ViewGroupError {
    /// An instance handed to an adapter is not of the type captured at registration.
    /// The registered callback did not run.
    #[code = "ERR_TYPE_MISMATCH"]
    #[error(
        "Type mismatch{}: {action} expects {operand} of type `{expected}`, got `{found}`",
        format_context(.context)
    )]
    TypeMismatch {
        action: ActionKind,
        operand: Operand,
        expected: &'static str,
        found: &'static str,
        context: Option<Cow<'static, str>>,
    },
}
