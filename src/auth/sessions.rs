/**
 * Session Tokens
 *
 * This module handles JWT generation and validation for user sessions.
 * Tokens bind only the user identifier and are valid for one day; there
 * are no scopes and no refresh mechanism. Verification is stateless, so
 * a token cannot be revoked before it expires.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Session lifetime in seconds (one day).
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing and verification keys for session tokens
///
/// Built once from the configured secret and carried in application
/// state. The secret is never hard-coded; it comes from `JWT_SECRET`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Build keys from the configured signing secret
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Issue a signed session token for a user
    ///
    /// The token carries the user id as `sub` and expires after
    /// [`TOKEN_TTL_SECS`].
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + TOKEN_TTL_SECS,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a session token and return its claims
    ///
    /// Fails if the signature is invalid, the token malformed, or the
    /// token expired. Callers collapse all three to "unauthorized"; the
    /// distinction is never surfaced to clients.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::from_secret("unit-test-secret")
    }

    #[test]
    fn test_issue_and_verify() {
        let user_id = Uuid::new_v4();
        let token = keys().issue(user_id).unwrap();
        assert!(!token.is_empty());

        let claims = keys().verify(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_garbage_fails() {
        assert!(keys().verify("invalid.token.here").is_err());
    }

    #[test]
    fn test_verify_wrong_secret_fails() {
        let token = keys().issue(Uuid::new_v4()).unwrap();
        let other = TokenKeys::from_secret("a-different-secret");
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_verify_expired_fails() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        // Far enough in the past to clear the default validation leeway.
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            exp: now - 3600,
            iat: now - 3600 - TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("unit-test-secret".as_ref()),
        )
        .unwrap();

        assert!(keys().verify(&token).is_err());
    }
}
