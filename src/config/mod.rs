#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::BootstrapArgs;

use crate::domain::model::{Theme, ThemeVariant};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub const DEFAULT_BACKEND_PORT: u16 = 8080;
pub const DEFAULT_FRONTEND_PORT: u16 = 8081;
pub const DEFAULT_THEME_NAME: &str = "universo";
pub const MAX_SHUTDOWN_GRACE_SECONDS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    pub address: String,
    /// `0` 代表由作業系統指定埠號
    pub port: u16,
    pub shutdown_grace_seconds: u64,
}

impl ServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port,
            shutdown_grace_seconds: 10,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = validation::validate_ip_address("server.address", &self.address)?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeConfig {
    pub name: String,
    pub variant: ThemeVariant,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME_NAME.to_string(),
            variant: ThemeVariant::Dark,
        }
    }
}

impl ThemeConfig {
    pub fn theme(&self) -> Theme {
        Theme::new(self.name.clone(), self.variant)
    }
}

/// 兩個程序共用的完整設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub theme: ThemeConfig,
}

impl Settings {
    pub fn backend_defaults() -> Self {
        Self {
            server: ServerConfig::with_port(DEFAULT_BACKEND_PORT),
            logging: LoggingConfig::default(),
            theme: ThemeConfig::default(),
        }
    }

    pub fn frontend_defaults() -> Self {
        Self {
            server: ServerConfig::with_port(DEFAULT_FRONTEND_PORT),
            logging: LoggingConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_ip_address("server.address", &self.server.address)?;
        validation::validate_range(
            "server.shutdown_grace_seconds",
            self.server.shutdown_grace_seconds,
            0,
            MAX_SHUTDOWN_GRACE_SECONDS,
        )?;
        validation::validate_identifier("logging.level", &self.logging.level)?;
        validation::validate_identifier("theme.name", &self.theme.name)?;
        Ok(())
    }
}
