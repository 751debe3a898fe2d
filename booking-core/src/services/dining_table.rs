//! Dining Table Service

use super::require_id;
use crate::db::Database;
use shared::models::{DiningTable, Restaurant, Validate};
use shared::{DomainError, DomainResult, Entity};

/// Validate and insert a new table, returning the assigned id
///
/// The referenced restaurant must exist.
pub fn add(db: &mut Database, table: DiningTable) -> DomainResult<i64> {
    table.validate()?;
    if db.restaurants.get(table.restaurant_id).is_none() {
        return Err(DomainError::not_found(
            Entity::Restaurant,
            table.restaurant_id,
        ));
    }
    let id = db.tables.insert(table);
    tracing::debug!(id, "dining table added");
    Ok(id)
}

/// Replace a stored table after re-running the reference and validity checks
pub fn update(db: &mut Database, table: DiningTable) -> DomainResult<()> {
    let id = require_id(&table)?;
    if db.tables.get(id).is_none() {
        return Err(DomainError::not_found(Entity::DiningTable, id));
    }
    if db.restaurants.get(table.restaurant_id).is_none() {
        return Err(DomainError::not_found(
            Entity::Restaurant,
            table.restaurant_id,
        ));
    }
    table.validate()?;
    db.tables.replace(table);
    tracing::debug!(id, "dining table updated");
    Ok(())
}

/// Delete a table by id
///
/// Reservations referencing the table are left in place; their `table_id`
/// dangles until they are updated or deleted themselves.
pub fn delete(db: &mut Database, id: i64) -> DomainResult<()> {
    if !db.tables.remove(id) {
        return Err(DomainError::not_found(Entity::DiningTable, id));
    }
    tracing::debug!(id, "dining table deleted");
    Ok(())
}

/// Plain lookup by id
pub fn get(db: &Database, id: i64) -> Option<DiningTable> {
    db.tables.get(id).cloned()
}

/// The restaurant that owns the table
pub fn restaurant_of(db: &Database, table_id: i64) -> DomainResult<Restaurant> {
    let table = db
        .tables
        .get(table_id)
        .ok_or_else(|| DomainError::not_found(Entity::DiningTable, table_id))?;
    db.restaurants
        .get(table.restaurant_id)
        .cloned()
        .ok_or_else(|| DomainError::not_found(Entity::Restaurant, table.restaurant_id))
}
