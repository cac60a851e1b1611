#[vbridge_derive::bridge_error]
pub enum DemoError {
    #[code = "ERR_IO"]
    #[error("IO error: {source}")]
    Io { source: std::io::Error },
}

fn main() {}
