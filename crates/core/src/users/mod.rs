//! Users module - domain models, services, and traits.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{
    normalize_email, LoginInput, NewUser, RegisterInput, User, UserCredentials, UserRole,
};
pub use users_service::{UserService, EMAIL_EXISTS_MESSAGE, USER_NOT_FOUND_MESSAGE};
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
