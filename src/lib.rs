//! # Order Desk
//!
//! > **Users, orders, and the rules between them, over an in-memory store.**
//!
//! Two small services sit on top of one shared store:
//!
//! - the **user service** registers users and deactivates them (one way only),
//! - the **order service** places orders for active users and moves them
//!   through a five-state status machine.
//!
//! ## Architecture Notes
//!
//! ### 1. Explicit wiring, no globals
//! The store is an ordinary value. [`OrderSystem`](lifecycle::OrderSystem)
//! creates one and hands `Arc` handles to both services. Services never cache
//! records; every read goes back to the store.
//!
//! ### 2. Narrow seams
//! Services depend on traits, not on each other's concrete types:
//! [`Store`](store::Store) for storage and [`UserLookup`](lookup::UserLookup)
//! for the order service's view of users.
//!
//! ### 3. Concurrency Model
//! One exclusive lock inside [`InMemoryStore`](store::InMemoryStore) serializes
//! every store call, reads included. Multi-step service operations are not
//! atomic as a whole (see [`order_service`]).
//!
//! ### 4. Type-Safe Error Handling
//! Each service defines its own error type ([`UserError`](user_service::UserError),
//! [`OrderError`](order_service::OrderError)). Failed preconditions never
//! store anything.
//!
//! ## Module Tour
//!
//! - [`model`] - `User`, `Order`, `OrderStatus` and typed ids
//! - [`store`] - the storage contract and its in-memory implementation
//! - [`lookup`] - the user lookup capability used by orders
//! - [`user_service`] / [`order_service`] - validation and business rules
//! - [`config`] - YAML configuration
//! - [`lifecycle`] - system wiring and tracing setup
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ORDER_DESK_CONFIG=config/default.yaml cargo run
//! ```

pub mod config;
pub mod lifecycle;
pub mod lookup;
pub mod model;
pub mod order_service;
pub mod store;
pub mod user_service;
