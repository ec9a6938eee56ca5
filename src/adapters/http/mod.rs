pub mod handlers;
pub mod pages;
pub mod router;

use crate::domain::ports::UserStore;
use crate::domain::services::AuthService;
use std::path::PathBuf;
use std::sync::Arc;

pub use router::build_router;

pub struct AppState<S: UserStore> {
    pub auth: AuthService<S>,
    pub static_dir: PathBuf,
}

impl<S: UserStore> AppState<S> {
    pub fn new(store: S, static_dir: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self {
            auth: AuthService::new(store),
            static_dir: static_dir.into(),
        })
    }
}
