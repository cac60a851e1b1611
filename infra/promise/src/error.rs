use std::borrow::Cow;

/// Contract violations raised by a [`ResultChannel`](crate::ResultChannel).
///
/// These are programming errors in the settling code, never business failures; business
/// failures travel through the channel as a `CodedError`.
#[vbridge_derive::bridge_error]
pub enum ChannelError {
    /// `resolve`/`reject` was called after the channel already reached a terminal state.
    #[code = "ERR_DOUBLE_SETTLEMENT"]
    #[error("Result channel already settled{}: {message}", format_context(.context))]
    DoubleSettlement { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
