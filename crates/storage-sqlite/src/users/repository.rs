use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use crate::schema::users::dsl::*;
use expense_insight_core::errors::Result;
use expense_insight_core::users::{NewUser, User, UserCredentials, UserRepositoryTrait};
use expense_insight_core::utils::new_record_id;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_user(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let row = users
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        row.into_user()
    }

    fn find_credentials_by_email(&self, user_email: &str) -> Result<Option<UserCredentials>> {
        let mut conn = get_connection(&self.pool)?;
        users
            .filter(email.eq(user_email))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(UserDB::into_credentials)
            .transpose()
    }

    fn email_exists(&self, user_email: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = users
            .filter(email.eq(user_email))
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count > 0)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let row = NewUserDB::from_domain(
                    new_user,
                    new_record_id(),
                    Utc::now().naive_utc(),
                );
                let created = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                created.into_user()
            })
            .await
    }
}
