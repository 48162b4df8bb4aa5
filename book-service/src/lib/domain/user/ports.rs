use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Port for account domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account with a hashed secret.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - username is already taken
    /// * `HashingFailed` - the password could not be hashed
    /// * `DatabaseError` - database operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve an account by its unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - no account with this username
    /// * `DatabaseError` - database operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new account; the store assigns the ID.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - the unique constraint on username fired
    /// * `DatabaseError` - database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve an account by username.
    ///
    /// # Errors
    /// * `DatabaseError` - database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
