//! Authorization policy
//!
//! Role parsing and the single policy function every role-protected
//! handler consults. Role checks are never duplicated ad hoc in
//! handlers; they all go through [`require_role`].

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Account role
///
/// Stored as text in the users table. Unknown values parse as `User`,
/// which fails closed for admin-gated routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Parse a stored role string
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }

    /// Stored string form of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// Check that an actual role satisfies a required role
///
/// `Admin` satisfies everything; `User` satisfies only `User`. Returns
/// `Forbidden` on a mismatch.
pub fn require_role(actual: Role, required: Role) -> Result<(), ApiError> {
    match (actual, required) {
        (Role::Admin, _) | (Role::User, Role::User) => Ok(()),
        (Role::User, Role::Admin) => Err(ApiError::forbidden("administrator role required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("user"), Role::User);
    }

    #[test]
    fn test_parse_unknown_role_fails_closed() {
        assert_eq!(Role::parse("superuser"), Role::User);
        assert_eq!(Role::parse(""), Role::User);
    }

    #[test]
    fn test_admin_satisfies_everything() {
        assert!(require_role(Role::Admin, Role::Admin).is_ok());
        assert!(require_role(Role::Admin, Role::User).is_ok());
    }

    #[test]
    fn test_user_cannot_act_as_admin() {
        assert!(require_role(Role::User, Role::Admin).is_err());
        assert!(require_role(Role::User, Role::User).is_ok());
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse(Role::Admin.as_str()), Role::Admin);
        assert_eq!(Role::parse(Role::User.as_str()), Role::User);
    }
}
