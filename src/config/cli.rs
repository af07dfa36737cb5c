use crate::config::toml_config::TomlConfig;
use crate::config::{LogFormat, Settings};
use crate::domain::model::ThemeVariant;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

/// 兩個啟動程式共用的命令列參數；沒有給的值沿用設定檔或預設值
#[derive(Debug, Clone, Default, Parser)]
#[command(about = "Universo Platformo application server")]
pub struct BootstrapArgs {
    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "UNIVERSO_CONFIG")]
    pub config: Option<PathBuf>,

    /// IP address to listen on
    #[arg(long, env = "SERVER_ADDRESS")]
    pub address: Option<String>,

    /// Port to listen on (0 picks a free port)
    #[arg(short, long, env = "SERVER_PORT")]
    pub port: Option<u16>,

    /// Theme name served under /themes/<name>/styles.css
    #[arg(long)]
    pub theme: Option<String>,

    #[arg(long, value_enum)]
    pub theme_variant: Option<ThemeVariant>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl BootstrapArgs {
    /// 預設值 < 設定檔 < 環境變數與命令列
    pub fn resolve(&self, defaults: Settings) -> Result<Settings> {
        let mut settings = defaults;

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(address) = &self.address {
            settings.server.address = address.clone();
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(theme) = &self.theme {
            settings.theme.name = theme.clone();
        }
        if let Some(variant) = self.theme_variant {
            settings.theme.variant = variant;
        }
        if let Some(format) = self.log_format {
            settings.logging.format = format;
        }
        if self.verbose {
            settings.logging.level = "debug".to_string();
        }

        settings.validate()?;
        Ok(settings)
    }
}
