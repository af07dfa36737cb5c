pub mod application;
pub mod http;
pub mod server;

pub use crate::core::application::Application;
pub use crate::domain::model::RouteRequest;
pub use crate::domain::ports::View;
pub use crate::utils::error::Result;
