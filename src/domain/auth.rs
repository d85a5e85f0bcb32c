//! Authentication domain types

use serde::{Deserialize, Serialize};

/// Dashboard role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Technician,
}

/// Signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// `/auth/login` answers either with `{ user, token? }` or with the bare user.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LoginResponse {
    Session {
        user: User,
        #[serde(default)]
        token: Option<String>,
    },
    User(User),
}

impl LoginResponse {
    pub fn into_parts(self) -> (User, Option<String>) {
        match self {
            Self::Session { user, token } => (user, token),
            Self::User(user) => (user, None),
        }
    }
}
