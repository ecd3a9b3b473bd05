//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

const USERNAME_LENGTH: std::ops::RangeInclusive<usize> = 3..=64;

/// A registered account. `password_hash` is a PHC string and never leaves the
/// server in a response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// Input model for registering a user. The password is already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        let username_len = self.username.chars().count();
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingField("username".to_string()).into());
        }
        if !USERNAME_LENGTH.contains(&username_len) {
            return Err(ValidationError::InvalidInput(format!(
                "Username must be between {} and {} characters",
                USERNAME_LENGTH.start(),
                USERNAME_LENGTH.end()
            ))
            .into());
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email".to_string()).into());
        }
        if !is_plausible_email(&self.email) {
            return Err(
                ValidationError::InvalidInput(format!("Invalid email: {}", self.email)).into(),
            );
        }
        if self.password_hash.is_empty() {
            return Err(ValidationError::MissingField("password".to_string()).into());
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$stub".to_string(),
        }
    }

    #[test]
    fn test_valid_user() {
        assert!(new_user("satoshi", "satoshi@example.com").validate().is_ok());
    }

    #[test]
    fn test_username_length_bounds() {
        assert!(new_user("ab", "a@b.c").validate().is_err());
        assert!(new_user("abc", "a@b.c").validate().is_ok());
        assert!(new_user(&"x".repeat(64), "a@b.c").validate().is_ok());
        assert!(new_user(&"x".repeat(65), "a@b.c").validate().is_err());
    }

    #[test]
    fn test_email_must_have_local_and_domain() {
        for email in ["nobody", "@example.com", "nobody@", "a@b@c"] {
            assert!(
                matches!(
                    new_user("satoshi", email).validate(),
                    Err(Error::Validation(ValidationError::InvalidInput(_)))
                ),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: "u1".to_string(),
            username: "satoshi".to_string(),
            email: "satoshi@example.com".to_string(),
            password_hash: "secret".to_string(),
            created_at: NaiveDateTime::default(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["username"], "satoshi");
    }
}
