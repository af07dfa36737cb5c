use clap::Parser;
use universo_platformo::utils::logger;
use universo_platformo::{run_core_server, BootstrapArgs, PlatformError, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = BootstrapArgs::parse();

    let settings = match args.resolve(Settings::backend_defaults()) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    // 初始化日誌
    logger::init_logger(&settings.logging, args.verbose)?;
    tracing::info!("Starting core-server");
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = run_core_server(&settings).await {
        tracing::error!(
            "❌ core-server failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        exit_with(&e);
    }

    Ok(())
}

fn exit_with(e: &PlatformError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code().max(1))
}
