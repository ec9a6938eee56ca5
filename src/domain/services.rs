use crate::domain::model::{
    LoginRequest, LoginResponse, NewUser, PublicUser, RegisterRequest, RegisterResponse, UserType,
};
use crate::domain::ports::UserStore;
use crate::utils::error::{AtsError, Result};
use crate::utils::validation::non_empty;

pub struct AuthService<S: UserStore> {
    store: S,
}

impl<S: UserStore> AuthService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse> {
        tracing::info!(
            "📝 Register Request Received: username={:?}, email={:?}, password=****, fullName={:?}, userType={:?}",
            request.username,
            request.email,
            request.full_name,
            request.user_type
        );

        let (Some(username), Some(email), Some(password)) = (
            non_empty(request.username),
            non_empty(request.email),
            non_empty(request.password),
        ) else {
            return Err(AtsError::validation(
                "Username, email, and password are required",
            ));
        };

        // null 或空字串都視為未指定
        let user_type = match non_empty(request.user_type) {
            None => UserType::default(),
            Some(raw) => raw.parse::<UserType>().map_err(|_| {
                AtsError::validation("userType must be 'job_seeker' or 'recruiter'")
            })?,
        };

        if self
            .store
            .find_by_username_or_email(&username, &email)
            .await?
            .is_some()
        {
            return Err(AtsError::DuplicateUser);
        }

        let new_user = NewUser {
            username,
            email,
            password,
            full_name: request.full_name,
            user_type,
            created_at: chrono::Utc::now(),
        };

        let user_id = self.store.insert(new_user).await?;
        tracing::info!("✅ User saved successfully: {}", user_id);

        Ok(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id,
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        let (Some(username), Some(password)) =
            (non_empty(request.username), non_empty(request.password))
        else {
            return Err(AtsError::validation(
                "Username and password are required",
            ));
        };

        tracing::info!("📝 Login attempt for username: {}", username);

        let user = self.store.find_by_username(&username).await?;
        tracing::info!("User found: {}", if user.is_some() { "Yes" } else { "No" });

        let user = match user {
            Some(user) if user.password == password => user,
            _ => return Err(AtsError::InvalidCredentials),
        };

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            user: PublicUser::from(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::memory::InMemoryUserStore;

    fn register_request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            ..Default::default()
        }
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_defaults_to_job_seeker() {
        let service = AuthService::new(InMemoryUserStore::new());

        let response = service
            .register(register_request("alice", "alice@example.com", "pw"))
            .await
            .unwrap();
        assert_eq!(response.message, "User registered successfully");
        assert_eq!(response.user_id.len(), 24);

        let stored = service
            .store()
            .find_by_username("alice")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.user_type, UserType::JobSeeker);
        assert_eq!(stored.full_name, None);
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let service = AuthService::new(InMemoryUserStore::new());

        let err = service
            .register(register_request("alice", "", "pw"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Username, email, and password are required");

        let err = service.register(RegisterRequest::default()).await.unwrap_err();
        assert!(matches!(err, AtsError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_register_rejects_unknown_user_type() {
        let service = AuthService::new(InMemoryUserStore::new());
        let mut request = register_request("alice", "alice@example.com", "pw");
        request.user_type = Some("admin".to_string());

        let err = service.register(request).await.unwrap_err();
        assert_eq!(err.to_string(), "userType must be 'job_seeker' or 'recruiter'");
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_username_or_email() {
        let service = AuthService::new(InMemoryUserStore::new());
        service
            .register(register_request("alice", "alice@example.com", "pw"))
            .await
            .unwrap();

        let same_name = service
            .register(register_request("alice", "other@example.com", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(same_name, AtsError::DuplicateUser));

        let same_email = service
            .register(register_request("alice2", "alice@example.com", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(same_email, AtsError::DuplicateUser));
    }

    #[tokio::test]
    async fn test_login_success_returns_public_user() {
        let service = AuthService::new(InMemoryUserStore::new());
        let mut request = register_request("carol", "carol@example.com", "secret");
        request.full_name = Some("Carol Danvers".to_string());
        request.user_type = Some("recruiter".to_string());
        let registered = service.register(request).await.unwrap();

        let response = service
            .login(login_request("carol", "secret"))
            .await
            .unwrap();
        assert_eq!(response.message, "Login successful");
        assert_eq!(response.user.id, registered.user_id);
        assert_eq!(response.user.full_name.as_deref(), Some("Carol Danvers"));
        assert_eq!(response.user.user_type, UserType::Recruiter);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let service = AuthService::new(InMemoryUserStore::new());
        service
            .register(register_request("dave", "dave@example.com", "right"))
            .await
            .unwrap();

        let wrong_password = service
            .login(login_request("dave", "wrong"))
            .await
            .unwrap_err();
        let unknown_user = service
            .login(login_request("nobody", "right"))
            .await
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert!(matches!(wrong_password, AtsError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_requires_fields() {
        let service = AuthService::new(InMemoryUserStore::new());
        let err = service
            .login(LoginRequest {
                username: Some("dave".to_string()),
                password: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Username and password are required");
    }
}
