use crate::config::{LogFormat, Settings};
use crate::domain::model::ThemeVariant;
use crate::utils::error::{PlatformError, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// TOML 設定檔，所有段落與欄位皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub logging: Option<LoggingSection>,
    pub theme: Option<ThemeSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub address: Option<String>,
    pub port: Option<u16>,
    pub shutdown_grace_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSection {
    pub name: Option<String>,
    pub variant: Option<ThemeVariant>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| PlatformError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PlatformError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SERVER_PORT})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static pattern is valid")
        });

        re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
    }

    /// 將檔案中有設定的欄位覆蓋到 `settings`
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(server) = &self.server {
            if let Some(address) = &server.address {
                settings.server.address = address.clone();
            }
            if let Some(port) = server.port {
                settings.server.port = port;
            }
            if let Some(grace) = server.shutdown_grace_seconds {
                settings.server.shutdown_grace_seconds = grace;
            }
        }

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                settings.logging.level = level.clone();
            }
            if let Some(format) = logging.format {
                settings.logging.format = format;
            }
        }

        if let Some(theme) = &self.theme {
            if let Some(name) = &theme.name {
                settings.theme.name = name.clone();
            }
            if let Some(variant) = theme.variant {
                settings.theme.variant = variant;
            }
        }
    }
}
