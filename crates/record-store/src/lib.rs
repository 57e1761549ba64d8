//! # Record Store
//!
//! Domain-free building blocks for in-memory record keeping. A record type
//! describes itself once through the [`Record`] trait, and [`RecordTable`]
//! provides the keyed storage and sequential id assignment for it.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into two layers:
//!
//! 1. **Record Layer** ([`Record`]) - what a stored value looks like and how it is identified
//! 2. **Table Layer** ([`RecordTable`]) - storage, id generation and lookups
//!
//! Tables carry no synchronisation of their own. An owner that needs to share
//! several tables across threads wraps them together behind a single lock, so
//! that one acquisition covers every table it touches.
//!
//! ```rust
//! use record_store::{Record, RecordTable};
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: u32,
//!     text: String,
//! }
//!
//! impl Record for Note {
//!     type Id = u32;
//!
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//!
//!     fn assign_id(&mut self, id: u32) {
//!         self.id = id;
//!     }
//! }
//!
//! let mut notes = RecordTable::<Note>::new();
//! let id = notes.insert(Note { id: 0, text: "hello".into() });
//! assert_eq!(id, 1);
//! assert_eq!(notes.get(id).unwrap().text, "hello");
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockLookup`](mock::MockLookup), an
//! expectation-driven stand-in for components that resolve records by id.

pub mod mock;
pub mod record;
pub mod table;

pub use record::Record;
pub use table::RecordTable;
