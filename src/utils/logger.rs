use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 依設定建立 EnvFilter，`RUST_LOG` 優先
pub fn build_filter(logging: &LoggingConfig, verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { logging.level.as_str() };

    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("universo_platformo={},warn", level)))
}

pub fn init_logger(logging: &LoggingConfig, verbose: bool) -> anyhow::Result<()> {
    let filter = build_filter(logging, verbose);
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(), // 給日誌收集器使用
            )
            .try_init()?,
    }

    Ok(())
}
