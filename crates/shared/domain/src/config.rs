use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level bridge configuration shared across crates.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BridgeConfigInner {
    pub logging: LoggingConfig,
    pub dispatch: DispatchConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    #[serde(flatten, default)]
    inner: Arc<BridgeConfigInner>,
}

impl Deref for BridgeConfig {
    type Target = BridgeConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for BridgeConfig {
    fn deref_mut(&mut self) -> &mut BridgeConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logger name, also the rolling file prefix.
    pub name: String,
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    pub console: bool,
    /// Rolling file output directory; console-only when absent.
    pub directory: Option<PathBuf>,
    pub max_files: usize,
    /// JSON lines for file output.
    pub json: bool,
    /// Extra directives, e.g. `vbridge_view_group=trace`.
    pub env_filter: Option<String>,
}

/// Dispatch-time behaviour of view-group adapters.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub type_mismatch: MismatchPolicy,
}

/// What an adapter does when handed an instance of the wrong concrete type.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Log at error level and return `TypeMismatch` to the dispatcher.
    #[default]
    Error,
    /// Panic on the dispatching thread.
    Panic,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: "vbridge".to_owned(),
            level: "info".to_owned(),
            console: true,
            directory: None,
            max_files: 10,
            json: false,
            env_filter: None,
        }
    }
}
