pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::{build_router, AppState};
pub use adapters::storage::{InMemoryUserStore, MongoUserStore};
pub use config::{CliConfig, TomlConfig};
pub use core::server::AtsServer;
pub use domain::services::AuthService;
pub use utils::error::{AtsError, Result};
