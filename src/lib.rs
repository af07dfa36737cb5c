pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod ui;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::BootstrapArgs;

pub use app::{run_core_frontend, run_core_server, CoreFrontendApplication, CoreServerApplication};
pub use config::Settings;
pub use crate::core::server::ApplicationServer;
pub use utils::error::{PlatformError, Result};
