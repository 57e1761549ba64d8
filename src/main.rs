//! Demo binary: wires an [`OrderSystem`] and walks one user and one order
//! through their lifecycle.
//!
//! The configuration file is taken from `ORDER_DESK_CONFIG` when set.

use order_desk::config::SystemConfig;
use order_desk::lifecycle::{setup_tracing, OrderSystem};
use order_desk::model::OrderStatus;
use tracing::{error, info, info_span};

fn main() -> Result<(), String> {
    let config = match std::env::var_os("ORDER_DESK_CONFIG") {
        Some(path) => SystemConfig::load(path).map_err(|e| e.to_string())?,
        None => SystemConfig::default(),
    };

    // Setup tracing once for the entire application
    setup_tracing(&config);

    info!("Starting order desk demo");
    let system = OrderSystem::with_config(&config);

    let user_id = info_span!("user_registration").in_scope(|| {
        system
            .users()
            .create_user("Ann", "ann@x.com")
            .map_err(|e| e.to_string())
    })?;

    let order_id = info_span!("order_processing").in_scope(|| {
        let orders = system.orders();
        let order_id = orders
            .create_order(user_id, "Laptop", 1000.0)
            .map_err(|e| e.to_string())?;
        orders
            .update_order_status(order_id, OrderStatus::Confirmed)
            .map_err(|e| e.to_string())?;
        info!(total = orders.total_amount(user_id), "Order confirmed");
        Ok::<_, String>(order_id)
    })?;

    let span = info_span!("order_cancellation");
    let _guard = span.enter();
    match system.orders().cancel_order(order_id) {
        Ok(()) => info!(%order_id, "Order cancelled"),
        Err(e) => error!(error = %e, "Cancellation failed"),
    }
    // Cancelled is not cancellable again.
    if let Err(e) = system.orders().cancel_order(order_id) {
        info!(error = %e, "Second cancellation rejected as expected");
    }

    info!(
        total = system.orders().total_amount(user_id),
        active_users = system.users().active_users().len(),
        "Demo completed"
    );
    Ok(())
}
