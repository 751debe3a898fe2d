//! Reservation Service

use super::{dining_table, require_id};
use crate::db::Database;
use shared::models::{Reservation, Validate};
use shared::validation::is_within_opening_hours;
use shared::{DomainError, DomainResult, Entity};

/// Validate and insert a new reservation, returning the assigned id
///
/// The booking user and the reserved table must exist, and the time must
/// fall inside the opening hours of the restaurant that owns the table.
pub fn add(db: &mut Database, reservation: Reservation) -> DomainResult<i64> {
    reservation.validate()?;
    if db.users.get(reservation.user_id).is_none() {
        return Err(DomainError::not_found(Entity::User, reservation.user_id));
    }
    check_opening_hours(db, &reservation)?;
    let id = db.reservations.insert(reservation);
    tracing::debug!(id, "reservation added");
    Ok(id)
}

/// Replace a stored reservation after re-running every check
pub fn update(db: &mut Database, reservation: Reservation) -> DomainResult<()> {
    let id = require_id(&reservation)?;
    if db.reservations.get(id).is_none() {
        return Err(DomainError::not_found(Entity::Reservation, id));
    }
    if db.users.get(reservation.user_id).is_none() {
        return Err(DomainError::not_found(Entity::User, reservation.user_id));
    }
    check_opening_hours(db, &reservation)?;
    reservation.validate()?;
    db.reservations.replace(reservation);
    tracing::debug!(id, "reservation updated");
    Ok(())
}

/// Delete a reservation by id
pub fn delete(db: &mut Database, id: i64) -> DomainResult<()> {
    if !db.reservations.remove(id) {
        return Err(DomainError::not_found(Entity::Reservation, id));
    }
    tracing::debug!(id, "reservation deleted");
    Ok(())
}

/// Plain lookup by id
pub fn get(db: &Database, id: i64) -> Option<Reservation> {
    db.reservations.get(id).cloned()
}

/// The reservation must fall inside the opening hours of the restaurant
/// that owns its table, resolved reservation -> table -> restaurant
fn check_opening_hours(db: &Database, reservation: &Reservation) -> DomainResult<()> {
    let restaurant = dining_table::restaurant_of(db, reservation.table_id)?;
    if !is_within_opening_hours(reservation.time, restaurant.open_hour, restaurant.close_hour) {
        tracing::warn!(
            table_id = reservation.table_id,
            time = %reservation.time,
            "reservation outside opening hours"
        );
        return Err(DomainError::validation(
            Entity::Reservation,
            "reservation time should be in restaurant working hours",
        ));
    }
    Ok(())
}
