//! # Record Table
//!
//! This module defines `RecordTable`, the keyed storage behind every record
//! kind. It owns the records and the id counter for one record type.

use crate::record::Record;
use std::collections::HashMap;
use tracing::{debug, info};

/// A keyed collection of records with sequential id assignment.
///
/// # Implementation Details
///
/// The table maintains an internal `HashMap` mapping ids to records and a `u32`
/// counter (`next_id`) for id generation.
///
/// ## Operations
///
/// * **Insert**:
///     1. Converts the current `next_id` to `T::Id` and increments the counter.
///     2. Overwrites the record's id with the new one.
///     3. Stores the record and returns the id.
///
/// * **Get**: returns a clone of the record if present, or `None`.
///
/// * **Replace**: overwrites the stored record with the same id. Nothing is
///   merged; the incoming record replaces every field.
///
/// * **Remove**: drops the record with the given id.
///
/// * **Reset**: drops every record and restarts the counter at 1.
///
/// Iteration order of [`RecordTable::all`] and [`RecordTable::filter`] follows
/// the underlying `HashMap` and must not be relied upon.
#[derive(Debug)]
pub struct RecordTable<T: Record> {
    records: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: Record> Default for RecordTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordTable<T> {
    /// Creates an empty table whose first assigned id is 1.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            next_id: 1,
        }
    }

    /// Stores `record` under a freshly assigned id and returns that id.
    pub fn insert(&mut self, mut record: T) -> T::Id {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        record.assign_id(id);
        self.records.insert(id, record);
        info!(record_type = record_type::<T>(), %id, size = self.records.len(), "Inserted");
        id
    }

    /// Returns a copy of the record with the given id.
    pub fn get(&self, id: T::Id) -> Option<T> {
        let item = self.records.get(&id).cloned();
        debug!(record_type = record_type::<T>(), %id, found = item.is_some(), "Get");
        item
    }

    /// Returns copies of every record, in no particular order.
    pub fn all(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    /// Returns copies of the records matching `predicate`, in no particular order.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Replaces the stored record carrying the same id.
    ///
    /// Returns `false` and leaves the table untouched when no such record exists.
    pub fn replace(&mut self, record: T) -> bool {
        let id = record.id();
        match self.records.get_mut(&id) {
            Some(slot) => {
                *slot = record;
                info!(record_type = record_type::<T>(), %id, "Replaced");
                true
            }
            None => {
                debug!(record_type = record_type::<T>(), %id, "Replace target not found");
                false
            }
        }
    }

    /// Removes the record with the given id. Returns whether one was removed.
    pub fn remove(&mut self, id: T::Id) -> bool {
        let removed = self.records.remove(&id).is_some();
        if removed {
            info!(record_type = record_type::<T>(), %id, size = self.records.len(), "Removed");
        }
        removed
    }

    /// Drops every record and restarts id assignment at 1.
    pub fn reset(&mut self) {
        let dropped = self.records.len();
        self.records.clear();
        self.next_id = 1;
        info!(record_type = record_type::<T>(), dropped, "Reset");
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Short type name (e.g. "User" instead of "order_desk::model::user::User")
fn record_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u32,
        label: String,
    }

    impl Record for Tag {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn assign_id(&mut self, id: u32) {
            self.id = id;
        }
    }

    fn tag(label: &str) -> Tag {
        Tag {
            id: 0,
            label: label.to_string(),
        }
    }

    #[test]
    fn insert_ignores_incoming_id() {
        let mut table = RecordTable::<Tag>::new();
        let id = table.insert(Tag {
            id: 42,
            label: "x".to_string(),
        });

        assert_eq!(id, 1);
        assert_eq!(table.get(1).unwrap().id, 1);
        assert!(table.get(42).is_none());
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut table = RecordTable::<Tag>::new();
        let first = table.insert(tag("a"));
        assert!(table.remove(first));

        let second = table.insert(tag("b"));
        assert_eq!(second, 2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn reset_restarts_counter() {
        let mut table = RecordTable::<Tag>::new();
        table.insert(tag("a"));
        table.insert(tag("b"));

        table.reset();

        assert!(table.is_empty());
        assert_eq!(table.insert(tag("c")), 1);
    }

    #[test]
    fn record_type_strips_module_path() {
        assert_eq!(record_type::<Tag>(), "Tag");
    }
}
