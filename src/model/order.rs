//! Customer orders and their status.
//!
//! Orders reference their owner by [`UserId`] only; the owner is checked when
//! the order is created and never again.
use crate::model::UserId;
use record_store::Record;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order is in its lifecycle.
///
/// ```text
/// Pending ──cancel──> Cancelled
/// Confirmed ──cancel──> Cancelled
/// Shipped / Delivered / Cancelled ──cancel──> rejected
/// ```
///
/// Direct status updates are not constrained by this diagram; only
/// cancellation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Only orders that have not left the warehouse can be cancelled.
    pub fn is_cancellable(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub product_name: String,
    pub amount: f64,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new, unsaved Order instance.
    ///
    /// # Arguments
    /// * `user_id` - ID of the user placing the order
    /// * `product_name` - Name of the product being ordered
    /// * `amount` - Order amount
    ///
    /// # Notes
    /// The order is initialized with status `Pending`.
    pub fn new(user_id: UserId, product_name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: OrderId::default(),
            user_id,
            product_name: product_name.into(),
            amount,
            status: OrderStatus::Pending,
        }
    }
}

impl Record for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }

    fn assign_id(&mut self, id: OrderId) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_and_confirmed_are_cancellable() {
        let cancellable: Vec<_> = OrderStatus::ALL
            .into_iter()
            .filter(|s| s.is_cancellable())
            .collect();
        assert_eq!(cancellable, vec![OrderStatus::Pending, OrderStatus::Confirmed]);
    }

    #[test]
    fn test_new_order_is_pending_and_unsaved() {
        let order = Order::new(UserId(3), "Laptop", 1000.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.id, OrderId(0));
        assert_eq!(order.user_id, UserId(3));
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(OrderId(4).to_string(), "order_4");
        assert_eq!(OrderStatus::Delivered.to_string(), "delivered");
    }
}
