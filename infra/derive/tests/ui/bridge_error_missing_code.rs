#[vbridge_derive::bridge_error]
pub enum DemoError {
    #[error("Internal error: {message}")]
    Internal { message: String, context: Option<std::borrow::Cow<'static, str>> },
}

fn main() {}
