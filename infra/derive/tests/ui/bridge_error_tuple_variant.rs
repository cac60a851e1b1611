#[vbridge_derive::bridge_error]
pub enum DemoError {
    Io(std::io::Error),
}

fn main() {}
