//! Facade crate for the bridge workspace.
//! Re-exports the domain, kernel, view-group and promise crates and adds the module descriptor
//! that owns a module's frozen definitions.
//! Keep this crate thin: it should compose other crates, not implement dispatch logic.
//!
//! ## Usage
//! - Describe a module with [`ModuleDescriptor::builder`].
//! - Enable the `logger` feature and call [`init_logging`] once in the host.

mod error;
mod module;

pub use crate::error::{ModuleError, ModuleErrorExt};
pub use crate::module::{ModuleDescriptor, ModuleDescriptorBuilder};
pub use vbridge_domain as domain;
pub use vbridge_kernel as kernel;
#[cfg(feature = "logger")]
pub use vbridge_logger as logger;
pub use vbridge_promise as promise;
pub use vbridge_view_group as view_group;

/// Commonly used types for module authors.
pub mod prelude {
    pub use crate::{ModuleDescriptor, ModuleError};
    pub use vbridge_domain::action::ActionKind;
    pub use vbridge_domain::coded::{Coded, CodedError};
    pub use vbridge_domain::element::{Element, ElementRef, TypeTag};
    pub use vbridge_promise::{Outcome, Promise, ResultChannel, Settlement};
    pub use vbridge_view_group::{ActionSlot, DefinitionBuilder, ViewGroupDefinition};
}

/// Installs the global tracing subscriber described by `config.logging`.
///
/// # Errors
/// Returns an error if the logging configuration is invalid or a subscriber is already set.
#[cfg(feature = "logger")]
pub fn init_logging(
    config: &domain::config::BridgeConfig,
) -> Result<vbridge_logger::Logger, vbridge_logger::LoggerError> {
    let logger = vbridge_logger::Logger::from_config(&config.logging)?;
    tracing::info!(
        name = %config.logging.name,
        level = %config.logging.level,
        mismatch_policy = ?config.dispatch.type_mismatch,
        "Bridge logging initialized"
    );
    Ok(logger)
}
