pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_mongo_uri, validate_non_empty_string, validate_path, validate_range, Validate,
};
use clap::Parser;
use std::path::PathBuf;

pub use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DB_NAME: &str = "ats_db";
pub const DEFAULT_STATIC_DIR: &str = ".";
pub const DEFAULT_SERVER_SELECTION_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, Parser)]
#[command(name = "ats-backend")]
#[command(about = "Applicant Tracking System auth backend")]
pub struct CliConfig {
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "MONGO_URI", default_value = DEFAULT_MONGO_URI, hide_env_values = true)]
    pub mongo_uri: String,

    #[arg(long, env = "DB_NAME", default_value = DEFAULT_DB_NAME)]
    pub db_name: String,

    #[arg(long, env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: String,

    #[arg(long, default_value_t = DEFAULT_SERVER_SELECTION_TIMEOUT_MS)]
    pub server_selection_timeout_ms: u64,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Keep users in memory instead of MongoDB (development only)")]
    pub in_memory: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn mongo_uri(&self) -> &str {
        &self.mongo_uri
    }

    fn database_name(&self) -> &str {
        &self.db_name
    }

    fn static_dir(&self) -> &str {
        &self.static_dir
    }

    fn server_selection_timeout_ms(&self) -> u64 {
        self.server_selection_timeout_ms
    }
}

/// Checks shared by every config source.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_non_empty_string("server.host", config.host())?;
    validate_range("server.port", config.port(), 1, u16::MAX)?;
    validate_mongo_uri("database.uri", config.mongo_uri())?;
    validate_non_empty_string("database.name", config.database_name())?;
    validate_path("server.static_dir", config.static_dir())?;
    validate_range(
        "database.server_selection_timeout_ms",
        config.server_selection_timeout_ms(),
        100,
        60_000,
    )?;
    Ok(())
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
