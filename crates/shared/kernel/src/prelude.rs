pub use crate::config::{ConfigError, ConfigErrorExt, load_bridge_config, load_config};
pub use vbridge_domain::action::ActionKind;
pub use vbridge_domain::coded::{Cause, Coded, CodedError};
pub use vbridge_domain::config::{BridgeConfig, DispatchConfig, LoggingConfig, MismatchPolicy};
pub use vbridge_domain::element::{Element, ElementRef, TypeTag};
