use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Actor recorded on accounts created through registration; accounts are
/// never created on behalf of another authenticated user.
const REGISTRATION_ACTOR: &str = "system";

/// Domain service implementation for account operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Only the hash ever reaches the repository
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::HashingFailed(e.to_string()))?;

        let user = NewUser {
            username: command.username,
            password_hash,
            created_at: Utc::now(),
            created_by: Some(REGISTRATION_ACTOR.to_string()),
        };

        self.repository.create(user).await
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
        }
    }

    fn persisted(user: NewUser) -> User {
        User {
            id: crate::domain::user::models::UserId(1),
            username: user.username,
            password_hash: user.password_hash,
            created_at: user.created_at,
            created_by: user.created_by,
            modified_at: None,
            modified_by: None,
        }
    }

    #[tokio::test]
    async fn test_register_user_hashes_and_attributes() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "testuser"
                    && user.password_hash.starts_with("$argon2")
                    && user.created_by.as_deref() == Some("system")
            })
            .times(1)
            .returning(|user| Ok(persisted(user)));

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand::new(
            Username::new("testuser".to_string()).unwrap(),
            "password123".to_string(),
        );

        let user = service.register_user(command).await.unwrap();
        assert_eq!(user.username.as_str(), "testuser");
        // The plaintext never survives registration
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_register_user_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand::new(
            Username::new("testuser".to_string()).unwrap(),
            "password123".to_string(),
        );

        let result = service.register_user(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_user_by_username_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let username = Username::new("nonexistent".to_string()).unwrap();
        let result = service.get_user_by_username(&username).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::NotFoundByUsername(_)
        ));
    }
}
