//! In-memory [`Store`] backed by two record tables behind one lock.

use crate::model::{Order, OrderId, User, UserId};
use crate::store::Store;
use record_store::RecordTable;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct Tables {
    users: RecordTable<User>,
    orders: RecordTable<Order>,
}

/// In-memory store.
///
/// This does not persist data, all changes are lost when the process ends.
///
/// **Concurrency Model**:
/// A single exclusive lock guards both tables. Every operation, reads
/// included, holds it for its whole duration, so each call is atomic on its
/// own. Nothing spans two calls: a caller doing "read then write" performs two
/// separate acquisitions.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // No operation leaves the tables half-updated, so a panic in another
    // holder does not invalidate them.
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Store for InMemoryStore {
    fn save_user(&self, user: User) -> UserId {
        self.lock().users.insert(user)
    }

    fn find_user(&self, id: UserId) -> Option<User> {
        self.lock().users.get(id)
    }

    fn all_users(&self) -> Vec<User> {
        self.lock().users.all()
    }

    fn update_user(&self, user: User) -> bool {
        self.lock().users.replace(user)
    }

    fn delete_user(&self, id: UserId) -> bool {
        self.lock().users.remove(id)
    }

    fn save_order(&self, order: Order) -> OrderId {
        self.lock().orders.insert(order)
    }

    fn find_order(&self, id: OrderId) -> Option<Order> {
        self.lock().orders.get(id)
    }

    fn orders_by_owner(&self, owner: UserId) -> Vec<Order> {
        self.lock().orders.filter(|order| order.user_id == owner)
    }

    fn all_orders(&self) -> Vec<Order> {
        self.lock().orders.all()
    }

    fn update_order(&self, order: Order) -> bool {
        self.lock().orders.replace(order)
    }

    fn delete_order(&self, id: OrderId) -> bool {
        self.lock().orders.remove(id)
    }

    fn clear(&self) {
        let mut tables = self.lock();
        tables.users.reset();
        tables.orders.reset();
    }
}
