use chrono::Utc;

use stockgrid_auth::{NewUser, UserAccount};
use stockgrid_core::{DomainError, DomainResult, UserId};

use super::UserStore;

/// Registration and credential checks over the user collection.
#[derive(Clone)]
pub struct UserService {
    users: UserStore,
}

impl UserService {
    pub fn new(users: UserStore) -> Self {
        Self { users }
    }

    pub fn register(&self, new: NewUser) -> DomainResult<UserAccount> {
        let username = new.username.trim().to_lowercase();
        if self.find_by_username(&username).is_some() {
            return Err(DomainError::conflict(format!("username '{username}' is taken")));
        }

        let id = UserId::new();
        let user = UserAccount::register(id, new, Utc::now())?;
        self.users.upsert(id, user.clone());
        tracing::info!(user_id = %id, username = %user.username, "user registered");
        Ok(user)
    }

    pub fn get(&self, id: UserId) -> DomainResult<UserAccount> {
        self.users.get(&id).ok_or(DomainError::NotFound)
    }

    pub fn find_by_username(&self, username: &str) -> Option<UserAccount> {
        self.users.list().into_iter().find(|u| u.username == username)
    }

    /// Check credentials for a login attempt.
    ///
    /// Unknown username, wrong password and suspended account all collapse to
    /// `Unauthorized` so responses do not leak which part failed.
    pub fn authenticate(&self, username: &str, password: &str) -> DomainResult<UserAccount> {
        let username = username.trim().to_lowercase();
        let user = self
            .find_by_username(&username)
            .ok_or(DomainError::Unauthorized)?;

        if !user.verify_password(password) {
            return Err(DomainError::Unauthorized);
        }
        user.ensure_active()?;

        Ok(user)
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }
}
