#[vbridge_derive::bridge_error]
pub enum DemoError {
    #[code = "ERR_DEMO"]
    #[error("first")]
    First { context: Option<std::borrow::Cow<'static, str>> },

    #[code = "ERR_DEMO"]
    #[error("second")]
    Second { context: Option<std::borrow::Cow<'static, str>> },
}

fn main() {}
