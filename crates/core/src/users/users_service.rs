use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::errors::{Error, Result};
use crate::users::users_model::{NewUser, User, UserCredentials};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::utils::ensure_record_id;

pub const EMAIL_EXISTS_MESSAGE: &str = "Email already exists";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<User> {
        ensure_record_id(user_id)?;
        self.repository
            .get_user(user_id)
            .map_err(|e| e.into_domain(USER_NOT_FOUND_MESSAGE))
    }

    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        self.repository.find_credentials_by_email(email)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        if self.repository.email_exists(&new_user.email)? {
            debug!("Registration rejected, email already in use");
            return Err(Error::ConstraintViolation(EMAIL_EXISTS_MESSAGE.to_string()));
        }
        // The unique index still guards against a concurrent registration.
        let user = self
            .repository
            .create_user(new_user)
            .await
            .map_err(|e| match e.into_domain(USER_NOT_FOUND_MESSAGE) {
                Error::ConstraintViolation(_) => {
                    Error::ConstraintViolation(EMAIL_EXISTS_MESSAGE.to_string())
                }
                other => other,
            })?;
        info!("Registered user {}", user.id);
        Ok(user)
    }
}
