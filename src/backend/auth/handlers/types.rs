/**
 * Authentication Handler Types
 *
 * Request and response types used by the register, login and me handlers.
 */

use serde::{Deserialize, Serialize};

use crate::shared::blog::{EntityId, Role};

/// Register request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct RegisterRequest {
    pub email: Option<String>,
    /// Stored as given
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Returns `(email, password)`; an absent field becomes an empty string.
    pub fn into_credentials(self) -> (String, String) {
        (self.email.unwrap_or_default(), self.password.unwrap_or_default())
    }
}

/// Register response: `{"status":"registered","userId":N}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisterResponse {
    pub status: String,
    #[serde(rename = "userId")]
    pub user_id: EntityId,
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
}

/// Current identity
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MeResponse {
    pub id: EntityId,
    pub role: Role,
}
