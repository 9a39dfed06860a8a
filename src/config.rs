use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Tiny Fleet
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TinyFleetConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Default log level when RUST_LOG is unset
    pub log_level: String,
}

impl Default for TinyFleetConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

impl TinyFleetConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. tiny-fleet.toml (if present)
    /// 3. Environment variables (prefixed with TINY_FLEET_)
    pub fn load() -> Result<Self> {
        let mut builder =
            Config::builder().add_source(Config::try_from(&TinyFleetConfig::default())?);

        if Path::new("tiny-fleet.toml").exists() {
            builder = builder.add_source(File::with_name("tiny-fleet"));
        }

        builder = builder.add_source(
            Environment::with_prefix("TINY_FLEET")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<TinyFleetConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = TinyFleetConfig::load_env_file();
        TinyFleetConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static TinyFleetConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}
