//! # Mock Lookups & Testing Guide
//!
//! `MockLookup<T>` stands in for any component that resolves a record by id.
//! Instead of holding real state, it replays a queue of expectations, which
//! makes it easy to simulate records that are hard to set up for real (an
//! owner that disappears, a record in an unusual state, ...).
//!
//! ## When to use Mocks vs Real Services
//!
//! | Feature | MockLookup | Real service |
//! |---------|------------|--------------|
//! | **State** | No real state (expectations) | Real store behind it |
//! | **Call checking** | Every lookup must be expected | None |
//! | **Use Case** | Testing the logic *around* a lookup | Testing the whole system |
//!
//! ## Example
//!
//! ```rust
//! use record_store::mock::MockLookup;
//! use record_store::Record;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Account { id: u32, open: bool }
//!
//! impl Record for Account {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//!     fn assign_id(&mut self, id: u32) { self.id = id; }
//! }
//!
//! let mock = MockLookup::<Account>::new();
//! mock.expect_get(1).return_some(Account { id: 1, open: true });
//! mock.expect_get(2).return_none();
//!
//! assert!(mock.lookup(1).unwrap().open);
//! assert!(mock.lookup(2).is_none());
//!
//! // Ensures all expectations were met
//! mock.verify();
//! ```
//!
//! A domain crate makes the mock usable wherever its own lookup trait is
//! expected by implementing that trait for `MockLookup<ItsRecord>`.

use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// An expected lookup and the answer to give for it.
struct Expectation<T: Record> {
    id: T::Id,
    response: Option<T>,
}

/// A lookup double with expectation tracking.
///
/// Lookups are answered strictly in the order the expectations were queued.
/// A lookup for a different id than the next expectation, or a lookup with no
/// expectation left, panics.
pub struct MockLookup<T: Record> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Record> Default for MockLookup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockLookup<T> {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Expects a lookup of `id`.
    pub fn expect_get(&self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Answers a lookup from the next queued expectation.
    ///
    /// # Panics
    /// Panics when no expectation is queued or the next one is for another id.
    pub fn lookup(&self, id: T::Id) -> Option<T> {
        let expectation = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match expectation {
            Some(expectation) if expectation.id == id => expectation.response,
            Some(expectation) => panic!(
                "Unexpected lookup: expected {}, got {}",
                expectation.id, id
            ),
            None => panic!("Unexpected lookup of {}: no expectations left", id),
        }
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: Record> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Record> GetExpectationBuilder<T> {
    /// Answers the lookup with `record`.
    pub fn return_some(self, record: T) {
        self.push(Some(record));
    }

    /// Answers the lookup with "not found".
    pub fn return_none(self) {
        self.push(None);
    }

    fn push(self, response: Option<T>) {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Expectation {
                id: self.id,
                response,
            });
    }
}
