//! # System Lifecycle & Wiring
//!
//! This module puts the pieces together: one store, the two services on top
//! of it, and the logging setup for the process.
//!
//! ## The OrderSystem Pattern
//!
//! Components are built leaf-first and handed to their dependents explicitly:
//!
//! ```rust,ignore
//! let store = Arc::new(InMemoryStore::new());
//! let users = Arc::new(UserService::new(store.clone()));
//! let orders = OrderService::new(store.clone(), users.clone());
//! ```
//!
//! The order service only sees the user service through the
//! [`UserLookup`](crate::lookup::UserLookup) trait, so tests can wire a
//! [`MockLookup`](record_store::mock::MockLookup) in its place.
//!
//! ## Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging for the
//! process. See the [`tracing`](self::tracing) module for what gets logged and how to filter it.

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use self::tracing::*;
