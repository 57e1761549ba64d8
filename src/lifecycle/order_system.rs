use crate::config::SystemConfig;
use crate::order_service::OrderService;
use crate::store::{InMemoryStore, Store};
use crate::user_service::UserService;
use std::sync::Arc;
use tracing::info;

/// The wiring for the order management system.
///
/// `OrderSystem` is responsible for:
/// - **Construction**: creating exactly one store for the whole system
/// - **Dependency Wiring**: handing that store to both services, and the user
///   service to the order service as its user lookup
/// - **Reset**: returning the system to its initial state
///
/// Nothing here is global: every `OrderSystem` owns an independent store, so
/// each test can build its own.
///
/// # Example
///
/// ```
/// use order_desk::lifecycle::OrderSystem;
/// use order_desk::model::OrderStatus;
///
/// let system = OrderSystem::new();
///
/// let user_id = system.users().create_user("Ann", "ann@x.com").unwrap();
/// let order_id = system.orders().create_order(user_id, "Laptop", 1000.0).unwrap();
/// system.orders().cancel_order(order_id).unwrap();
///
/// assert_eq!(system.orders().get_order(order_id).unwrap().status, OrderStatus::Cancelled);
/// assert_eq!(system.orders().total_amount(user_id), 0.0);
/// ```
#[derive(Clone)]
pub struct OrderSystem {
    store: Arc<InMemoryStore>,
    users: Arc<UserService>,
    orders: OrderService,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Creates a system with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&SystemConfig::default())
    }

    /// Creates a system honouring the settings in `config`.
    pub fn with_config(config: &SystemConfig) -> Self {
        // 1. One store shared by everything
        let store = Arc::new(InMemoryStore::new());

        // 2. User service has no dependencies besides the store
        let users = Arc::new(UserService::with_email_policy(
            store.clone(),
            config.email_policy,
        ));

        // 3. Order service looks owners up through the user service
        let orders = OrderService::new(store.clone(), users.clone());

        info!(email_policy = ?config.email_policy, "Order system ready");
        Self {
            store,
            users,
            orders,
        }
    }

    /// Direct access to the shared store.
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }

    pub fn orders(&self) -> &OrderService {
        &self.orders
    }

    /// Drops every user and order and restarts id assignment at 1.
    pub fn reset(&self) {
        self.store.clear();
        info!("Order system reset");
    }
}
