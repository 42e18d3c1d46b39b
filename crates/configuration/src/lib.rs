use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use settings::ServerArgs;
pub use settings::{DatabaseSettings, ServerSettings, Settings};

/// The file looked for in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "albums.toml";

/// Prefix for environment overrides, e.g. `ALBUMS__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "ALBUMS";

/// Loads the service configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file (a
/// missing default file is fine, a missing explicit one is an error), then
/// `ALBUMS__*` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    validate(&settings)?;

    tracing::debug!(?settings, "Configuration loaded.");
    Ok(settings)
}

/// Rejects settings that would only fail later at bind or connect time.
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port must be non-zero".to_string(),
        ));
    }
    if settings.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "database.max_connections must be at least 1".to_string(),
        ));
    }
    if settings.database.url_env.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "database.url_env must name an environment variable".to_string(),
        ));
    }
    Ok(())
}
