//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use expense_insight_core::users::{NewUser, User, UserCredentials};
use expense_insight_core::Result;

/// Database model for users
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new user
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl UserDB {
    pub fn into_credentials(self) -> Result<UserCredentials> {
        let password_hash = self.password_hash.clone();
        Ok(UserCredentials {
            user: self.into_user()?,
            password_hash,
        })
    }

    pub fn into_user(self) -> Result<User> {
        Ok(User {
            role: self.role.parse()?,
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl NewUserDB {
    pub fn from_domain(new_user: NewUser, id: String, now: NaiveDateTime) -> Self {
        NewUserDB {
            id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
