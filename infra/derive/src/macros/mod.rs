pub mod element;
pub mod error;
