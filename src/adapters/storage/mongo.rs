use crate::domain::model::{NewUser, User, UserType};
use crate::domain::ports::{ConfigProvider, UserStore};
use crate::utils::error::{AtsError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime as BsonDateTime},
    error::{ErrorKind, WriteFailure},
    options::{ClientOptions, IndexOptions},
    Client, Collection, IndexModel,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const USERS_COLLECTION: &str = "users";

const DUPLICATE_KEY_CODE: i32 = 11000;

/// `users` 集合中的文件格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "userType", default)]
    pub user_type: UserType,
    #[serde(rename = "createdAt")]
    pub created_at: BsonDateTime,
}

impl From<NewUser> for UserDocument {
    fn from(user: NewUser) -> Self {
        Self {
            id: None,
            username: user.username,
            email: user.email,
            password: user.password,
            full_name: user.full_name,
            user_type: user.user_type,
            created_at: BsonDateTime::from_millis(user.created_at.timestamp_millis()),
        }
    }
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        Self {
            id: document.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: document.username,
            email: document.email,
            password: document.password,
            full_name: document.full_name,
            user_type: document.user_type,
            created_at: DateTime::<Utc>::from_timestamp_millis(
                document.created_at.timestamp_millis(),
            )
            .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MongoUserStore {
    users: Collection<UserDocument>,
}

impl MongoUserStore {
    /// Connects, pings the deployment and makes sure the unique indexes exist.
    pub async fn connect<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut options = ClientOptions::parse(config.mongo_uri()).await?;
        options.server_selection_timeout =
            Some(Duration::from_millis(config.server_selection_timeout_ms()));
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        tracing::info!("✅ MongoDB Connected");

        let database = client.database(config.database_name());
        let store = Self {
            users: database.collection::<UserDocument>(USERS_COLLECTION),
        };
        store.ensure_indexes().await?;

        Ok(store)
    }

    async fn ensure_indexes(&self) -> Result<()> {
        for field in ["username", "email"] {
            let index = IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build();
            self.users.create_index(index).await?;
            tracing::debug!("Unique index ensured on users.{}", field);
        }
        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let document = self.users.find_one(doc! { "username": username }).await?;
        Ok(document.map(User::from))
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>> {
        let filter = doc! {
            "$or": [
                { "username": username },
                { "email": email },
            ]
        };
        let document = self.users.find_one(filter).await?;
        Ok(document.map(User::from))
    }

    async fn insert(&self, user: NewUser) -> Result<String> {
        let document = UserDocument::from(user);

        let result = self.users.insert_one(&document).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AtsError::DuplicateUser
            } else {
                AtsError::DatabaseError(e)
            }
        })?;

        let id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };
        Ok(id)
    }
}
