//! Kernel utilities shared across bridge crates.
//! Keep this crate lightweight; it re-exports the domain and provides layered config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use vbridge_kernel::config::load_bridge_config;
//!
//! let cfg = load_bridge_config(Some("config/bridge.toml")).unwrap();
//! println!("{:?}", cfg.dispatch.type_mismatch);
//! ```
pub mod config;
pub mod prelude;

pub use vbridge_domain as domain;
