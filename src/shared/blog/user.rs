//! User Data Structure

use std::fmt;

use serde::{Deserialize, Serialize};

use super::EntityId;

/// What a user is allowed to be. Nothing enforces it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Author,
    Reader,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Author => "author",
            Role::Reader => "reader",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered account
///
/// SECURITY: `password` holds the credential exactly as submitted. There is
/// no hashing and no verification anywhere in the service. It is never
/// serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub role: Role,
    pub bio: String,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
            bio: self.bio.clone(),
        }
    }
}

/// Public view of a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: EntityId,
    pub username: String,
    pub role: Role,
    pub bio: String,
}

/// Request type for updating a user. Only the bio is writable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub bio: Option<String>,
}

impl UpdateUserRequest {
    pub fn apply(self, user: &mut User) {
        if let Some(bio) = self.bio {
            user.bio = bio;
        }
    }
}
