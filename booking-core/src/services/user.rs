//! User Service

use super::require_id;
use crate::db::Database;
use shared::models::{Reservation, User, UserType, Validate};
use shared::{DomainError, DomainResult, Entity};

/// Validate and insert a new user, returning the assigned id
pub fn add(db: &mut Database, user: User) -> DomainResult<i64> {
    user.validate()?;
    let id = db.users.insert(user);
    tracing::debug!(id, "user added");
    Ok(id)
}

/// Replace a stored user after re-running the validity checks
pub fn update(db: &mut Database, user: User) -> DomainResult<()> {
    let id = require_id(&user)?;
    if db.users.get(id).is_none() {
        return Err(DomainError::not_found(Entity::User, id));
    }
    user.validate()?;
    db.users.replace(user);
    tracing::debug!(id, "user updated");
    Ok(())
}

/// Delete a user by id
///
/// Reservations referencing the user are left in place; their `user_id`
/// dangles until they are updated or deleted themselves.
pub fn delete(db: &mut Database, id: i64) -> DomainResult<()> {
    if !db.users.remove(id) {
        return Err(DomainError::not_found(Entity::User, id));
    }
    tracing::debug!(id, "user deleted");
    Ok(())
}

/// Plain lookup by id
pub fn get(db: &Database, id: i64) -> Option<User> {
    db.users.get(id).cloned()
}

/// Reservations booked by the user
pub fn reservations(db: &Database, user_id: i64) -> DomainResult<Vec<Reservation>> {
    if db.users.get(user_id).is_none() {
        return Err(DomainError::not_found(Entity::User, user_id));
    }
    Ok(db
        .reservations
        .all()
        .filter(|r| r.user_id == user_id)
        .cloned()
        .collect())
}

/// Create a standard, inactive account
pub fn register(db: &mut Database, email: &str, password: &str) -> DomainResult<User> {
    let mut user = User {
        id: None,
        email: email.to_string(),
        password: password.to_string(),
        is_active: false,
        user_type: UserType::Standard,
    };
    let id = add(db, user.clone())?;
    user.id = Some(id);
    tracing::info!(id, "user registered");
    Ok(user)
}

/// Linear scan for an exact email + password match
///
/// Plaintext comparison, kept as specified; `None` doubles as "no such
/// user" and "wrong password".
pub fn login(db: &Database, email: &str, password: &str) -> Option<User> {
    db.users
        .all()
        .find(|u| u.email == email && u.password == password)
        .cloned()
}

/// Swap the password after verifying the old one matches exactly
pub fn change_password(
    db: &mut Database,
    id: i64,
    old_password: &str,
    new_password: &str,
) -> DomainResult<()> {
    let mut user = get(db, id).ok_or_else(|| DomainError::not_found(Entity::User, id))?;
    if user.password != old_password {
        tracing::warn!(id, "password change rejected");
        return Err(DomainError::validation(
            Entity::User,
            "passwords do not match",
        ));
    }
    user.password = new_password.to_string();
    update(db, user)
}

/// Mark the account active
pub fn activate(db: &mut Database, id: i64) -> DomainResult<()> {
    let mut user = get(db, id).ok_or_else(|| DomainError::not_found(Entity::User, id))?;
    user.is_active = true;
    update(db, user)
}

/// Change the account role
pub fn change_type(db: &mut Database, id: i64, user_type: UserType) -> DomainResult<()> {
    let mut user = get(db, id).ok_or_else(|| DomainError::not_found(Entity::User, id))?;
    user.user_type = user_type;
    update(db, user)
}
