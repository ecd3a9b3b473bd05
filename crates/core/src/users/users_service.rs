use log::info;
use std::sync::Arc;

use super::users_model::{NewUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result};

/// Service for account registration and lookup
pub struct UserService {
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { user_repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, new_user: NewUser) -> Result<User> {
        let new_user = NewUser {
            username: new_user.username.trim().to_string(),
            email: new_user.email.trim().to_lowercase(),
            ..new_user
        };
        new_user.validate()?;

        if self
            .user_repository
            .find_by_username(&new_user.username)?
            .is_some()
        {
            return Err(Error::ConstraintViolation(format!(
                "Username '{}' is already taken",
                new_user.username
            )));
        }
        if self.user_repository.find_by_email(&new_user.email)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "Email '{}' is already registered",
                new_user.email
            )));
        }

        let user = self.user_repository.create(new_user).await?;
        info!("Registered user {} ({})", user.username, user.id);
        Ok(user)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.user_repository.get_by_id(user_id)
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repository.find_by_username(username.trim())
    }
}
