use std::borrow::Cow;
use vbridge_domain::coded::Coded;

#[vbridge_derive::bridge_error]
pub enum DemoError {
    #[code = "ERR_IO"]
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[code = "ERR_INTERNAL"]
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = DemoError::from("boom");
    assert_eq!(err.code(), "ERR_INTERNAL");
}
