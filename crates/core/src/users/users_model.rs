//! User domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_PASSWORD_LENGTH, MIN_USER_NAME_LENGTH};
use crate::errors::{Error, Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            other => Err(Error::invalid_input(format!("Unknown user role '{}'", other))),
        }
    }
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A user together with the stored password hash, used only for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Input model for persisting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterInput {
    /// Checks the registration fields and returns a copy with the name
    /// trimmed and the email normalized.
    pub fn validate(self) -> Result<RegisterInput> {
        let name = self.name.trim().to_string();
        if name.chars().count() < MIN_USER_NAME_LENGTH {
            return Err(Error::invalid_input(format!(
                "Name must be at least {} characters",
                MIN_USER_NAME_LENGTH
            )));
        }
        let email = normalize_email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(Error::invalid_input(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        Ok(RegisterInput {
            name,
            email,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginInput {
    pub fn validate(self) -> Result<LoginInput> {
        let email = normalize_email(&self.email)?;
        if self.password.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "Password".to_string(),
            )));
        }
        Ok(LoginInput {
            email,
            password: self.password,
        })
    }
}

/// Trims and lowercases an email address after a basic syntax check.
pub fn normalize_email(raw: &str) -> Result<String> {
    let email = raw.trim().to_lowercase();
    let invalid = || Error::invalid_input("Invalid email address");

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email("  Jane.Doe@Example.COM ").unwrap(),
            "jane.doe@example.com"
        );
        for bad in ["", "plain", "@example.com", "a@b", "a@b.", "a@@b.com", "a b@c.com"] {
            assert!(normalize_email(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_register_validation() {
        let ok = register(" Jane ", "JANE@example.com", "secret1").validate().unwrap();
        assert_eq!(ok.name, "Jane");
        assert_eq!(ok.email, "jane@example.com");

        assert!(register("J", "jane@example.com", "secret1").validate().is_err());
        assert!(register("Jane", "jane", "secret1").validate().is_err());
        assert!(register("Jane", "jane@example.com", "12345").validate().is_err());
    }

    #[test]
    fn test_login_requires_password() {
        let err = LoginInput {
            email: "jane@example.com".into(),
            password: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "Password is required");
    }

    #[test]
    fn test_role_round_trip_through_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(UserRole::default().as_str(), "user");
        assert!("root".parse::<UserRole>().is_err());
    }
}
