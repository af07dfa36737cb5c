pub mod backend;
pub mod frontend;

pub use backend::{run_core_server, CoreServerApplication};
pub use frontend::{run_core_frontend, CoreFrontendApplication};
