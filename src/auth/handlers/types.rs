/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register, login, logout, and
 * me handlers.
 */

use serde::{Deserialize, Serialize};

use crate::middleware::auth::CurrentUser;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Plaintext password (hashed before storage, never persisted)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}

/// Plain message response body
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// User response (without sensitive data)
///
/// Safe to return to clients; never includes the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Account role ("user" or "admin")
    pub role: String,
}

impl From<CurrentUser> for UserResponse {
    fn from(user: CurrentUser) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role.as_str().to_string(),
        }
    }
}

/// `{"payload": User}` envelope for the me endpoint
#[derive(Serialize, Deserialize, Debug)]
pub struct UserPayload {
    pub payload: UserResponse,
}
