//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The filter comes from `RUST_LOG` when it is set and parses, and from
//! [`SystemConfig::log_filter`] otherwise. The output uses a compact format
//! that hides the crate/module prefix (`with_target(false)`); records are
//! identified by structured fields (`record_type`, `user_id`, `order_id`)
//! instead.
//!
//! ## What Gets Traced
//!
//! - **Store tables**: Insert, Replace, Remove, Reset (info) and Get (debug)
//! - **Service operations**: one span per mutating call, carrying its arguments
//! - **Rejections**: every failed precondition is logged at `warn` with the reason
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Include reads and totals
//! RUST_LOG=debug cargo run
//!
//! # Filter to one module
//! RUST_LOG=order_desk::order_service=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` the demo scenario prints:
//!
//! ```text
//! INFO create_user: Inserted record_type="User" id=user_1 size=1
//! INFO create_user: User created user_id=user_1
//! INFO create_order: Inserted record_type="Order" id=order_1 size=1
//! INFO create_order: Order created order_id=order_1
//! ```

use crate::config::SystemConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at process start.
pub fn setup_tracing(config: &SystemConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Records are tagged with record_type instead
        .compact()
        .init();
}
