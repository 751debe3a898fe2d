//! Keyed in-memory store
//!
//! One [`EntityMap`] per entity type, each with its own monotonic id
//! counter. Entity dispatch is resolved at compile time through the
//! [`Record`] trait, so there is no runtime type branching and no "wrong
//! argument type" error class.

pub mod snapshot;

use serde::{Deserialize, Serialize};
use shared::Entity;
use shared::models::{DiningTable, Reservation, Restaurant, User};
use std::collections::BTreeMap;

/// Storable entity: knows its kind and carries a store-assigned id
pub trait Record {
    /// Entity kind, used in error payloads
    const ENTITY: Entity;

    fn id(&self) -> Option<i64>;
    fn assign_id(&mut self, id: i64);
}

impl Record for User {
    const ENTITY: Entity = Entity::User;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for Restaurant {
    const ENTITY: Entity = Entity::Restaurant;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for DiningTable {
    const ENTITY: Entity = Entity::DiningTable;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for Reservation {
    const ENTITY: Entity = Entity::Reservation;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

/// Keyed map for one entity type with monotonic id assignment
///
/// Ids start at 1 and only ever grow; an id freed by [`remove`](Self::remove)
/// is never handed out again. The counter is part of the serialized state,
/// so this holds across snapshot round-trips too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMap<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for EntityMap<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<T: Record> EntityMap<T> {
    /// Assign the next id, store the row, return the id
    pub fn insert(&mut self, mut row: T) -> i64 {
        self.next_id += 1;
        row.assign_id(self.next_id);
        self.rows.insert(self.next_id, row);
        self.next_id
    }

    /// Overwrite the value stored at the row's id
    ///
    /// Rows without an id, or with an id that is not present, are ignored;
    /// existence checks belong to the service layer.
    pub fn replace(&mut self, row: T) {
        if let Some(id) = row.id()
            && self.rows.contains_key(&id)
        {
            self.rows.insert(id, row);
        }
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.rows.get(&id)
    }

    /// All rows, in ascending id order. Callers must not rely on ordering.
    pub fn all(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Remove the row with this id, reporting whether it was present
    pub fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The whole in-memory database: one keyed map per entity type
///
/// Serializable as-is, id counters included, so a snapshot restores id
/// assignment exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub users: EntityMap<User>,
    pub restaurants: EntityMap<Restaurant>,
    pub tables: EntityMap<DiningTable>,
    pub reservations: EntityMap<Reservation>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }
}
