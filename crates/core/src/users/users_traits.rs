use super::users_model::{NewUser, User};
use crate::errors::Result;

/// Trait defining the contract for User service operations.
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Registers a new account. Fails with a constraint violation when the
    /// username or email is already taken.
    async fn register(&self, new_user: NewUser) -> Result<User>;
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;
}

/// Trait defining the contract for User repository operations.
#[async_trait::async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn create(&self, new_user: NewUser) -> Result<User>;
    fn get_by_id(&self, user_id: &str) -> Result<User>;
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}
