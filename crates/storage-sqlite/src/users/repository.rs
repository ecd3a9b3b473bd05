use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use coinfolio_core::errors::DatabaseError;
use coinfolio_core::users::{NewUser, User, UserRepositoryTrait};
use coinfolio_core::{Error, Result};

use super::model::UserDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;

/// Repository for user accounts
pub struct UserRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let user_db = UserDB {
                    id: Uuid::new_v4().to_string(),
                    username: new_user.username,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    created_at: Utc::now().naive_utc(),
                };

                let result_db = diesel::insert_into(users::table)
                    .values(&user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(result_db.into())
            })
            .await
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        users::table
            .select(UserDB::as_select())
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(User::from)
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!("User {} not found", user_id)))
            })
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let result = users::table
            .select(UserDB::as_select())
            .filter(users::username.eq(username))
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(result.map(User::from))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let result = users::table
            .select(UserDB::as_select())
            .filter(users::email.eq(email))
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(result.map(User::from))
    }
}
