//! # User Service
//!
//! Validates and manages user records on top of a [`Store`].
//!
//! ## Overview
//!
//! The user service has no dependencies besides the store. It owns the
//! validation rules for new users and the one-way deactivation of existing
//! ones. Users are never deleted through the service.
//!
//! ## Structure
//!
//! - [`email`] - [`EmailPolicy`] and the email acceptance rules
//! - [`error`] - [`UserError`] / [`EmailError`] for type-safe error handling
//!
//! ## Usage
//!
//! ```rust
//! use order_desk::store::InMemoryStore;
//! use order_desk::user_service::UserService;
//! use std::sync::Arc;
//!
//! let service = UserService::new(Arc::new(InMemoryStore::new()));
//! let id = service.create_user("Alice", "alice@example.com").unwrap();
//!
//! service.deactivate_user(id).unwrap();
//! assert!(!service.get_user(id).unwrap().active);
//! ```

pub mod email;
pub mod error;

pub use email::EmailPolicy;
pub use error::*;

use crate::lookup::UserLookup;
use crate::model::{User, UserId};
use crate::store::Store;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Service for creating, reading and deactivating users.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn Store>,
    email_policy: EmailPolicy,
}

impl UserService {
    /// Creates a service that checks emails with [`EmailPolicy::Strict`].
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_email_policy(store, EmailPolicy::default())
    }

    pub fn with_email_policy(store: Arc<dyn Store>, email_policy: EmailPolicy) -> Self {
        Self {
            store,
            email_policy,
        }
    }

    pub fn email_policy(&self) -> EmailPolicy {
        self.email_policy
    }

    /// Registers a new, active user and returns its id.
    ///
    /// # Errors
    ///
    /// - [`UserError::InvalidName`] if `name` is empty
    /// - [`UserError::InvalidEmail`] if `email` fails the configured policy
    #[instrument(skip(self))]
    pub fn create_user(&self, name: &str, email: &str) -> Result<UserId, UserError> {
        if name.is_empty() {
            warn!("Rejected: empty name");
            return Err(UserError::InvalidName);
        }
        if let Err(e) = self.email_policy.check(email) {
            warn!(error = %e, "Rejected: invalid email");
            return Err(e.into());
        }

        let id = self.store.save_user(User::new(name, email));
        info!(user_id = %id, "User created");
        Ok(id)
    }

    /// Fetches a user by id.
    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.store.find_user(id)
    }

    /// Returns every active user, in no particular order.
    pub fn active_users(&self) -> Vec<User> {
        self.store
            .all_users()
            .into_iter()
            .filter(|user| user.active)
            .collect()
    }

    /// Marks a user inactive.
    ///
    /// Deactivating an already inactive user succeeds and leaves it inactive.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if no user has this id.
    #[instrument(skip(self))]
    pub fn deactivate_user(&self, id: UserId) -> Result<(), UserError> {
        let Some(mut user) = self.store.find_user(id) else {
            warn!("Not found");
            return Err(UserError::NotFound(id));
        };

        user.active = false;
        // The user can be deleted from the store between the read and the write.
        if !self.store.update_user(user) {
            warn!("Vanished before update");
            return Err(UserError::NotFound(id));
        }
        info!("User deactivated");
        Ok(())
    }

    /// True exactly when [`UserService::get_user`] would return a user.
    pub fn user_exists(&self, id: UserId) -> bool {
        let exists = self.get_user(id).is_some();
        debug!(user_id = %id, exists, "Exists");
        exists
    }
}

impl UserLookup for UserService {
    fn get_user(&self, id: UserId) -> Option<User> {
        UserService::get_user(self, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn test_new_user_is_active() {
        let users = service();
        let id = users.create_user("John Doe", "john@example.com").unwrap();

        let user = users.get_user(id).unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john@example.com");
        assert!(user.active);
    }

    #[test]
    fn test_invalid_email_is_reported_with_reason() {
        let users = service();
        assert_eq!(
            users.create_user("John Doe", "invalid-email"),
            Err(UserError::InvalidEmail(EmailError::MissingAtSymbol))
        );
    }

    #[test]
    fn test_empty_name_checked_before_email() {
        let users = service();
        assert_eq!(users.create_user("", ""), Err(UserError::InvalidName));
    }

    #[test]
    fn test_lookup_matches_get_user() {
        let users = service();
        let id = users.create_user("Ann", "ann@x.com").unwrap();
        let lookup: &dyn UserLookup = &users;

        assert_eq!(lookup.get_user(id), users.get_user(id));
        assert!(lookup.get_user(UserId(99)).is_none());
    }
}
