use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;
use vbridge_domain::config::BridgeConfig;

/// Prefix of environment overrides (`VBRIDGE__DISPATCH__TYPE_MISMATCH=panic`).
pub const ENV_PREFIX: &str = "VBRIDGE";
/// Separator between the prefix and nested keys.
pub const ENV_SEPARATOR: &str = "__";
/// Base name of the config file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "vbridge";

/// Custom error type for config loading.
#[vbridge_derive::bridge_error]
pub enum ConfigError {
    #[code = "ERR_CONFIG"]
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest precedence first:
/// 1. **Base File**: the file at `path` (required), or an optional `vbridge.*` file in the
///    current working directory when no path is given.
/// 2. **Environment Overrides**: variables prefixed with `VBRIDGE__`. Nested structures use
///    double underscores (e.g., `VBRIDGE__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// This function will return an error if:
/// * An explicitly given configuration file cannot be found or parsed.
/// * The merged values do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use vbridge_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct HostConfig {
///     port: u16,
/// }
///
/// let cfg: HostConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build_config(path.as_ref().map(AsRef::as_ref), None)
}

/// Same as [`load_config`], but reads overrides from `env` instead of the process environment.
///
/// Hosts that receive their environment from an embedding runtime pass it here.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Map<String, String>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build_config(path.as_ref().map(AsRef::as_ref), Some(env))
}

/// Loads the workspace-wide [`BridgeConfig`].
///
/// # Errors
/// See [`load_config`].
pub fn load_bridge_config(path: Option<impl AsRef<Path>>) -> Result<BridgeConfig, ConfigError> {
    load_config(path)
}

fn build_config<T>(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(env),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
