use crate::config::{
    validate_provider, DEFAULT_DB_NAME, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_SERVER_SELECTION_TIMEOUT_MS, DEFAULT_STATIC_DIR,
};
use crate::core::ConfigProvider;
use crate::utils::error::{AtsError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub uri: String,
    pub name: Option<String>,
    pub server_selection_timeout_ms: Option<u64>,
}

fn env_placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| AtsError::ConfigError {
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AtsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MONGO_URI})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if env_placeholder().is_match(&self.database.uri) {
            return Err(AtsError::MissingConfigError {
                field: "database.uri".to_string(),
            });
        }
        validate_provider(self)
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        self.server.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    fn mongo_uri(&self) -> &str {
        &self.database.uri
    }

    fn database_name(&self) -> &str {
        self.database.name.as_deref().unwrap_or(DEFAULT_DB_NAME)
    }

    fn static_dir(&self) -> &str {
        self.server.static_dir.as_deref().unwrap_or(DEFAULT_STATIC_DIR)
    }

    fn server_selection_timeout_ms(&self) -> u64 {
        self.database
            .server_selection_timeout_ms
            .unwrap_or(DEFAULT_SERVER_SELECTION_TIMEOUT_MS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
