use order_desk::model::{OrderId, OrderStatus, User, UserId};
use order_desk::order_service::{OrderError, OrderService};
use order_desk::store::{InMemoryStore, Store};
use record_store::mock::MockLookup;
use std::sync::Arc;

/// Real order service over a real store, with the user side mocked.
/// Every `create_order` consults the lookup exactly once, so each test queues
/// one expectation per creation attempt.
struct Harness {
    store: Arc<InMemoryStore>,
    users: Arc<MockLookup<User>>,
    orders: OrderService,
}

impl Harness {
    fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let users = Arc::new(MockLookup::<User>::new());
        let orders = OrderService::new(store.clone(), users.clone());
        Self {
            store,
            users,
            orders,
        }
    }

    fn owner(&self, id: u32, active: bool) {
        let mut user = User::new("Alice", "alice@example.com");
        user.id = UserId(id);
        user.active = active;
        self.users.expect_get(UserId(id)).return_some(user);
    }

    fn place(&self, owner: u32, product: &str, amount: f64) -> OrderId {
        self.owner(owner, true);
        self.orders
            .create_order(UserId(owner), product, amount)
            .expect("Failed to create order")
    }
}

#[test]
fn test_create_order_valid_input() {
    let h = Harness::new();
    h.owner(1, true);

    let id = h.orders.create_order(UserId(1), "Product", 100.0).unwrap();

    let order = h.orders.get_order(id).expect("Order not found");
    assert!(id.0 > 0);
    assert_eq!(order.user_id, UserId(1));
    assert_eq!(order.product_name, "Product");
    assert_eq!(order.amount, 100.0);
    assert_eq!(order.status, OrderStatus::Pending);
    h.users.verify();
}

#[test]
fn test_create_order_precondition_failures_store_nothing() {
    let h = Harness::new();

    h.users.expect_get(UserId(99)).return_none();
    assert_eq!(
        h.orders.create_order(UserId(99), "Product", 100.0),
        Err(OrderError::UserNotFound(UserId(99)))
    );

    h.owner(2, false);
    assert_eq!(
        h.orders.create_order(UserId(2), "Product", 100.0),
        Err(OrderError::InactiveUser(UserId(2)))
    );

    h.owner(1, true);
    assert_eq!(
        h.orders.create_order(UserId(1), "", 100.0),
        Err(OrderError::InvalidProductName)
    );

    h.owner(1, true);
    assert_eq!(
        h.orders.create_order(UserId(1), "Product", 0.0),
        Err(OrderError::InvalidAmount(0.0))
    );

    h.owner(1, true);
    assert_eq!(
        h.orders.create_order(UserId(1), "Product", -50.0),
        Err(OrderError::InvalidAmount(-50.0))
    );

    assert!(h.store.all_orders().is_empty());
    h.users.verify();
}

#[test]
fn test_smallest_positive_amount_accepted() {
    let h = Harness::new();
    let id = h.place(1, "X", 0.01);
    assert_eq!(h.orders.get_order(id).unwrap().amount, 0.01);
}

#[test]
fn test_get_order_unknown_id_returns_none() {
    let h = Harness::new();
    assert!(h.orders.get_order(OrderId(999)).is_none());
}

#[test]
fn test_user_orders_only_returns_owned_orders() {
    let h = Harness::new();
    let a1 = h.place(1, "Product A", 100.0);
    let a2 = h.place(1, "Product B", 200.0);
    h.place(2, "Product C", 300.0);

    let mut ids: Vec<OrderId> = h.orders.user_orders(UserId(1)).iter().map(|o| o.id).collect();
    ids.sort();
    assert_eq!(ids, vec![a1, a2]);
    assert!(h
        .orders
        .user_orders(UserId(2))
        .iter()
        .all(|o| o.user_id == UserId(2)));
    assert!(h.orders.user_orders(UserId(3)).is_empty());
}

#[test]
fn test_update_order_status_allows_any_transition() {
    let h = Harness::new();
    let id = h.place(1, "Product", 100.0);

    // Out of "terminal" states too
    for status in [
        OrderStatus::Delivered,
        OrderStatus::Pending,
        OrderStatus::Cancelled,
        OrderStatus::Shipped,
        OrderStatus::Confirmed,
    ] {
        assert_eq!(h.orders.update_order_status(id, status), Ok(()));
        assert_eq!(h.orders.get_order(id).unwrap().status, status);
    }
}

#[test]
fn test_update_order_status_unknown_order() {
    let h = Harness::new();
    assert_eq!(
        h.orders.update_order_status(OrderId(5), OrderStatus::Shipped),
        Err(OrderError::NotFound(OrderId(5)))
    );
}

#[test]
fn test_cancel_order_legality() {
    let h = Harness::new();

    for prior in OrderStatus::ALL {
        let id = h.place(1, "Product", 10.0);
        h.orders.update_order_status(id, prior).unwrap();

        let result = h.orders.cancel_order(id);
        let after = h.orders.get_order(id).unwrap().status;

        if matches!(prior, OrderStatus::Pending | OrderStatus::Confirmed) {
            assert_eq!(result, Ok(()), "cancel from {prior}");
            assert_eq!(after, OrderStatus::Cancelled);
        } else {
            assert_eq!(
                result,
                Err(OrderError::NotCancellable { id, status: prior }),
                "cancel from {prior}"
            );
            assert_eq!(after, prior, "status must be unchanged");
        }
    }
}

#[test]
fn test_cancel_order_unknown_order() {
    let h = Harness::new();
    assert_eq!(
        h.orders.cancel_order(OrderId(1)),
        Err(OrderError::NotFound(OrderId(1)))
    );
}

#[test]
fn test_total_amount_excludes_cancelled() {
    let h = Harness::new();
    h.place(1, "Product 1", 100.0);
    let cancelled = h.place(1, "Product 2", 200.0);
    h.place(1, "Product 3", 300.0);

    h.orders.cancel_order(cancelled).unwrap();

    assert_eq!(h.orders.total_amount(UserId(1)), 400.0);
}

#[test]
fn test_total_amount_counts_every_non_cancelled_status() {
    let h = Harness::new();
    let shipped = h.place(1, "A", 1.5);
    let delivered = h.place(1, "B", 2.5);
    h.place(1, "C", 3.0);
    h.orders.update_order_status(shipped, OrderStatus::Shipped).unwrap();
    h.orders.update_order_status(delivered, OrderStatus::Delivered).unwrap();

    assert_eq!(h.orders.total_amount(UserId(1)), 7.0);
}

#[test]
fn test_total_amount_no_orders_is_zero() {
    let h = Harness::new();
    assert_eq!(h.orders.total_amount(UserId(42)), 0.0);
}

#[test]
fn test_status_change_on_deleted_order_fails() {
    let h = Harness::new();
    let id = h.place(1, "Product", 10.0);
    assert!(h.store.delete_order(id));

    assert_eq!(h.orders.cancel_order(id), Err(OrderError::NotFound(id)));
    assert_eq!(
        h.orders.update_order_status(id, OrderStatus::Shipped),
        Err(OrderError::NotFound(id))
    );
}
