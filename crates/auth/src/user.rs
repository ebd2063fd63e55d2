//! User accounts for identity management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockgrid_core::{DomainError, DomainResult, UserId};

use crate::credentials::{self, CredentialError};
use crate::Role;

/// User account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// User is active and can authenticate.
    #[default]
    Active,
    /// User is suspended and cannot authenticate.
    Suspended,
}

impl core::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UserStatus::Active => f.write_str("ACTIVE"),
            UserStatus::Suspended => f.write_str("SUSPENDED"),
        }
    }
}

/// Input for registering a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// A registered user.
///
/// # Invariants
/// - Username is non-empty, lowercased, and unique (uniqueness enforced by
///   the user service).
/// - `password_hash` is a bcrypt hash, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn register(id: UserId, new: NewUser, now: DateTime<Utc>) -> DomainResult<Self> {
        let username = new.username.trim().to_lowercase();
        if username.is_empty() {
            return Err(DomainError::validation("username cannot be empty"));
        }

        let email = new.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }

        let password_hash = credentials::hash_password(&new.password).map_err(|e| match e {
            CredentialError::TooShort => DomainError::validation(e.to_string()),
            CredentialError::Hash(msg) => DomainError::validation(msg),
        })?;

        Ok(Self {
            id,
            username,
            email,
            password_hash,
            roles: new.roles,
            status: UserStatus::Active,
            created_at: now,
        })
    }

    pub fn verify_password(&self, plain: &str) -> bool {
        credentials::verify_password(plain, &self.password_hash)
    }

    pub fn ensure_active(&self) -> DomainResult<()> {
        if self.status == UserStatus::Suspended {
            return Err(DomainError::Unauthorized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str, password: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            roles: vec![Role::new("viewer")],
        }
    }

    #[test]
    fn register_normalizes_username_and_email() {
        let user = UserAccount::register(
            UserId::new(),
            new_user("  Alice ", "Alice@Example.COM", "hunter2hunter2"),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.status, UserStatus::Active);
        assert_ne!(user.password_hash, "hunter2hunter2");
    }

    #[test]
    fn register_rejects_invalid_email() {
        let result = UserAccount::register(
            UserId::new(),
            new_user("bob", "not-an-email", "hunter2hunter2"),
            Utc::now(),
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn register_rejects_short_password() {
        let result = UserAccount::register(UserId::new(), new_user("carol", "c@example.com", "short"), Utc::now());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn password_verification_uses_the_hash() {
        let user = UserAccount::register(
            UserId::new(),
            new_user("dave", "d@example.com", "hunter2hunter2"),
            Utc::now(),
        )
        .unwrap();

        assert!(user.verify_password("hunter2hunter2"));
        assert!(!user.verify_password("wrong"));
    }

    #[test]
    fn suspended_user_is_not_active() {
        let mut user = UserAccount::register(
            UserId::new(),
            new_user("eve", "e@example.com", "hunter2hunter2"),
            Utc::now(),
        )
        .unwrap();

        assert!(user.ensure_active().is_ok());
        user.status = UserStatus::Suspended;
        assert_eq!(user.ensure_active(), Err(DomainError::Unauthorized));
    }
}
