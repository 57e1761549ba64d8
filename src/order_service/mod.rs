//! # Order Service
//!
//! Validates and manages order records on top of a [`Store`], consulting a
//! [`UserLookup`] for the owner of every new order.
//!
//! ## Status Rules
//!
//! - [`OrderService::update_order_status`] overwrites the status with any
//!   value, from any value. Delivered and Cancelled are not terminal here.
//! - [`OrderService::cancel_order`] only moves Pending or Confirmed orders to
//!   Cancelled.
//!
//! ## Consistency
//!
//! Creating an order reads the owner and then saves the order in two separate
//! store calls. A deactivation landing between the two is not detected, so an
//! order can be created for an owner that became inactive a moment earlier.

pub mod error;

pub use error::*;

use crate::lookup::UserLookup;
use crate::model::{Order, OrderId, OrderStatus, UserId};
use crate::store::Store;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Service for placing orders and moving them through their lifecycle.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn Store>,
    users: Arc<dyn UserLookup>,
}

impl OrderService {
    pub fn new(store: Arc<dyn Store>, users: Arc<dyn UserLookup>) -> Self {
        Self { store, users }
    }

    /// Places a new Pending order and returns its id.
    ///
    /// Nothing is stored unless every check passes.
    ///
    /// # Errors
    ///
    /// - [`OrderError::UserNotFound`] if the owner does not exist
    /// - [`OrderError::InactiveUser`] if the owner has been deactivated
    /// - [`OrderError::InvalidProductName`] if `product_name` is empty
    /// - [`OrderError::InvalidAmount`] unless `amount > 0`
    #[instrument(skip(self))]
    pub fn create_order(
        &self,
        user_id: UserId,
        product_name: &str,
        amount: f64,
    ) -> Result<OrderId, OrderError> {
        let Some(owner) = self.users.get_user(user_id) else {
            warn!("Rejected: unknown user");
            return Err(OrderError::UserNotFound(user_id));
        };
        if !owner.active {
            warn!("Rejected: inactive user");
            return Err(OrderError::InactiveUser(user_id));
        }
        if product_name.is_empty() {
            warn!("Rejected: empty product name");
            return Err(OrderError::InvalidProductName);
        }
        if amount.is_nan() || amount <= 0.0 {
            warn!("Rejected: non-positive amount");
            return Err(OrderError::InvalidAmount(amount));
        }

        let id = self.store.save_order(Order::new(user_id, product_name, amount));
        info!(order_id = %id, "Order created");
        Ok(id)
    }

    /// Fetches an order by id.
    pub fn get_order(&self, id: OrderId) -> Option<Order> {
        self.store.find_order(id)
    }

    /// Returns every order placed by `user_id`, in no particular order.
    pub fn user_orders(&self, user_id: UserId) -> Vec<Order> {
        self.store.orders_by_owner(user_id)
    }

    /// Overwrites the status of an order, whatever its current status.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] if no order has this id.
    #[instrument(skip(self))]
    pub fn update_order_status(&self, id: OrderId, status: OrderStatus) -> Result<(), OrderError> {
        let Some(mut order) = self.store.find_order(id) else {
            warn!("Not found");
            return Err(OrderError::NotFound(id));
        };

        let previous = order.status;
        order.status = status;
        self.persist(order)?;
        info!(%previous, "Status updated");
        Ok(())
    }

    /// Cancels a Pending or Confirmed order.
    ///
    /// # Errors
    ///
    /// - [`OrderError::NotFound`] if no order has this id
    /// - [`OrderError::NotCancellable`] if the order is Shipped, Delivered or
    ///   already Cancelled; the order is left unchanged
    #[instrument(skip(self))]
    pub fn cancel_order(&self, id: OrderId) -> Result<(), OrderError> {
        let Some(mut order) = self.store.find_order(id) else {
            warn!("Not found");
            return Err(OrderError::NotFound(id));
        };

        if !order.status.is_cancellable() {
            warn!(status = %order.status, "Rejected: not cancellable");
            return Err(OrderError::NotCancellable {
                id,
                status: order.status,
            });
        }

        order.status = OrderStatus::Cancelled;
        self.persist(order)?;
        info!("Order cancelled");
        Ok(())
    }

    /// Sums the amounts of the user's orders, skipping cancelled ones.
    ///
    /// Returns `0.0` for a user without orders.
    pub fn total_amount(&self, user_id: UserId) -> f64 {
        let total: f64 = self
            .store
            .orders_by_owner(user_id)
            .iter()
            .filter(|order| order.status != OrderStatus::Cancelled)
            .map(|order| order.amount)
            .sum();
        debug!(%user_id, total, "Total amount");
        total
    }

    // The order can be deleted from the store between the read and the write.
    fn persist(&self, order: Order) -> Result<(), OrderError> {
        let id = order.id;
        if self.store.update_order(order) {
            Ok(())
        } else {
            warn!(order_id = %id, "Vanished before update");
            Err(OrderError::NotFound(id))
        }
    }
}
