use crate::domain::model::{NewUser, User};
use crate::domain::ports::UserStore;
use crate::utils::error::{AtsError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// 本機開發與測試用的使用者存儲，規則與 MongoDB 唯一索引一致
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
    next_id: AtomicU64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.username == username || u.email == email)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<String> {
        let mut users = self.users.write().await;

        if users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(AtsError::DuplicateUser);
        }

        // 24 位十六進位，與 ObjectId 字串長度相同
        let id = format!("{:024x}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        users.push(user.into_user(id.clone()));
        Ok(id)
    }
}
