use crate::domain::model::{NewUser, User};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn find_by_username_or_email(&self, username: &str, email: &str)
        -> Result<Option<User>>;
    /// Returns the new id. A unique-key clash surfaces as `AtsError::DuplicateUser`.
    async fn insert(&self, user: NewUser) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn mongo_uri(&self) -> &str;
    fn database_name(&self) -> &str;
    fn static_dir(&self) -> &str;
    fn server_selection_timeout_ms(&self) -> u64;
}
