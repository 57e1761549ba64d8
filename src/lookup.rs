//! # User Lookup
//!
//! The one capability the order service needs from the user side: resolve a
//! user by id. Keeping it this narrow lets order tests plug in a
//! [`MockLookup`] instead of a full user service.

use crate::model::{User, UserId};
use record_store::mock::MockLookup;

/// Resolves users by id.
pub trait UserLookup: Send + Sync {
    /// Returns the user with the given id, or `None` when there is none.
    fn get_user(&self, id: UserId) -> Option<User>;
}

impl UserLookup for MockLookup<User> {
    fn get_user(&self, id: UserId) -> Option<User> {
        self.lookup(id)
    }
}
