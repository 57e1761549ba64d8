//! # Record Trait
//!
//! The `Record` trait is the contract every stored value (users, orders, ...)
//! implements so that a generic [`RecordTable`](crate::RecordTable) can hold it.
//!
//! The associated `Id` type keeps identifiers apart at compile time: a table of
//! users is keyed by a user id and cannot be queried with an order id.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored value must implement to live in a `RecordTable`.
///
/// # Id Assignment
/// Ids are owned by the table, not by the caller. Whatever id a record carries
/// when it is inserted is overwritten through [`Record::assign_id`] with the
/// next value of the table's counter.
pub trait Record: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from u32 for sequential id generation.
    type Id: Copy + Eq + Hash + Send + Sync + Display + Debug + From<u32>;

    /// Returns the identifier currently carried by the record.
    fn id(&self) -> Self::Id;

    /// Overwrites the record's identifier.
    fn assign_id(&mut self, id: Self::Id);
}
