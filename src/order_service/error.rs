//! Error types for the Order service.

use crate::model::{OrderId, OrderStatus, UserId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The owner specified in the order does not exist.
    #[error("Invalid user: {0} does not exist")]
    UserNotFound(UserId),

    /// The owner exists but has been deactivated.
    #[error("Invalid user: {0} is inactive")]
    InactiveUser(UserId),

    /// The product name is empty.
    #[error("Order validation error: product name cannot be empty")]
    InvalidProductName,

    /// The amount is not strictly positive.
    #[error("Order validation error: amount must be greater than 0, got {0}")]
    InvalidAmount(f64),

    /// The order has progressed past the point where it can be cancelled.
    #[error("Order {id} cannot be cancelled while {status}")]
    NotCancellable { id: OrderId, status: OrderStatus },
}
