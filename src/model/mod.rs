//! Plain data records implementing the [`Record`](record_store::Record) trait.

pub mod order;
pub mod user;

pub use order::*;
pub use user::*;
