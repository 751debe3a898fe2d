//! Restaurant Service

use super::require_id;
use crate::db::Database;
use shared::models::{DiningTable, Reservation, Restaurant, User, Validate};
use shared::{DomainError, DomainResult, Entity};

/// Validate and insert a new restaurant, returning the assigned id
pub fn add(db: &mut Database, restaurant: Restaurant) -> DomainResult<i64> {
    restaurant.validate()?;
    let id = db.restaurants.insert(restaurant);
    tracing::debug!(id, "restaurant added");
    Ok(id)
}

/// Replace a stored restaurant after re-running the validity checks
pub fn update(db: &mut Database, restaurant: Restaurant) -> DomainResult<()> {
    let id = require_id(&restaurant)?;
    if db.restaurants.get(id).is_none() {
        return Err(DomainError::not_found(Entity::Restaurant, id));
    }
    restaurant.validate()?;
    db.restaurants.replace(restaurant);
    tracing::debug!(id, "restaurant updated");
    Ok(())
}

/// Delete a restaurant by id
///
/// Tables referencing the restaurant are left in place; their
/// `restaurant_id` dangles until they are updated or deleted themselves.
pub fn delete(db: &mut Database, id: i64) -> DomainResult<()> {
    if !db.restaurants.remove(id) {
        return Err(DomainError::not_found(Entity::Restaurant, id));
    }
    tracing::debug!(id, "restaurant deleted");
    Ok(())
}

/// Plain lookup by id
pub fn get(db: &Database, id: i64) -> Option<Restaurant> {
    db.restaurants.get(id).cloned()
}

/// Tables belonging to the restaurant
pub fn tables(db: &Database, restaurant_id: i64) -> DomainResult<Vec<DiningTable>> {
    if db.restaurants.get(restaurant_id).is_none() {
        return Err(DomainError::not_found(Entity::Restaurant, restaurant_id));
    }
    Ok(db
        .tables
        .all()
        .filter(|t| t.restaurant_id == restaurant_id)
        .cloned()
        .collect())
}

/// Reservations held at any of the restaurant's tables
pub fn reservations(db: &Database, restaurant_id: i64) -> DomainResult<Vec<Reservation>> {
    let tables = tables(db, restaurant_id)?;
    Ok(db
        .reservations
        .all()
        .filter(|r| tables.iter().any(|t| t.id == Some(r.table_id)))
        .cloned()
        .collect())
}

/// Users holding a reservation at the restaurant, one entry per reservation
///
/// A reservation whose user was deleted surfaces here as a not-found error.
pub fn users(db: &Database, restaurant_id: i64) -> DomainResult<Vec<User>> {
    reservations(db, restaurant_id)?
        .iter()
        .map(|r| {
            db.users
                .get(r.user_id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(Entity::User, r.user_id))
        })
        .collect()
}
