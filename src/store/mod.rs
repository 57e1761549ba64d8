//! # Store
//!
//! The [`Store`] trait is the storage capability shared by both services. It
//! covers the two record kinds (users and orders) and nothing else: no
//! transactions, no batching, no query language.
//!
//! Every operation is infallible from the caller's point of view. Misses are
//! reported as `None` or `false`, never as errors.
//!
//! Services hold an `Arc<dyn Store>` handle and re-query it on every read, so
//! a store can be swapped for a fresh one per test without touching services.

pub mod memory;

pub use memory::InMemoryStore;

use crate::model::{Order, OrderId, User, UserId};

/// Storage operations for users and orders.
///
/// Ids are owned by the store: `save_*` ignores the id on the incoming record
/// and returns the one it assigned. `update_*` is a full replacement of the
/// record with the same id.
pub trait Store: Send + Sync {
    // Users
    fn save_user(&self, user: User) -> UserId;
    fn find_user(&self, id: UserId) -> Option<User>;
    fn all_users(&self) -> Vec<User>;
    fn update_user(&self, user: User) -> bool;
    fn delete_user(&self, id: UserId) -> bool;

    // Orders
    fn save_order(&self, order: Order) -> OrderId;
    fn find_order(&self, id: OrderId) -> Option<Order>;
    fn orders_by_owner(&self, owner: UserId) -> Vec<Order>;
    fn all_orders(&self) -> Vec<Order>;
    fn update_order(&self, order: Order) -> bool;
    fn delete_order(&self, id: OrderId) -> bool;

    /// Removes every record of both kinds and restarts both id counters at 1.
    fn clear(&self);
}
