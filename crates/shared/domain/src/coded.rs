//! Coded errors: the only structured error shape that crosses the module boundary.

use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Shared, thread-safe error used as a rejection cause.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// An error that can name itself with a short machine-readable code (e.g. `ERR_TYPE_MISMATCH`).
///
/// Every error enum declared with `#[vbridge_derive::bridge_error]` implements this trait.
pub trait Coded: Error {
    fn code(&self) -> &'static str;
}

/// A business-level failure: machine-readable code, optional human message, optional cause.
#[derive(Debug, Clone)]
pub struct CodedError {
    code: Cow<'static, str>,
    message: Option<Cow<'static, str>>,
    cause: Option<Cause>,
}

impl CodedError {
    #[must_use]
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: Option<Cow<'static, str>>,
        cause: Option<Cause>,
    ) -> Self {
        Self { code: code.into(), message, cause }
    }

    /// Projects a [`Coded`] error: its code and display message, the error itself as the cause.
    #[must_use]
    pub fn from_coded<E>(error: E) -> Self
    where
        E: Coded + Send + Sync + 'static,
    {
        Self {
            code: Cow::Borrowed(error.code()),
            message: Some(error.to_string().into()),
            cause: Some(Arc::new(error)),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_cause(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Splits the error into its `(code, message, cause)` triple.
    #[must_use]
    pub fn into_parts(self) -> (Cow<'static, str>, Option<Cow<'static, str>>, Option<Cause>) {
        (self.code, self.message, self.cause)
    }
}

impl PartialEq for CodedError {
    fn eq(&self, other: &Self) -> bool {
        let same_cause = match (&self.cause, &other.cause) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.code == other.code && self.message == other.message && same_cause
    }
}

impl Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "[{}] {message}", self.code),
            None => write!(f, "[{}]", self.code),
        }
    }
}

impl Error for CodedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
