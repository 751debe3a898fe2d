//! Service Layer
//!
//! Per-entity modules of free functions over the [`Database`]. Every
//! mutation validates first and writes last, so a rejected call leaves the
//! store untouched. Derived queries are linear scans; there are no
//! secondary indexes at this scale.

pub mod dining_table;
pub mod reservation;
pub mod restaurant;
pub mod user;

use crate::db::Record;
use shared::{DomainError, DomainResult};

/// Resolve the id an update or delete targets
///
/// Rows that never went through the store have no id yet; updating one is a
/// caller mistake, reported as a validation failure.
fn require_id<T: Record>(row: &T) -> DomainResult<i64> {
    row.id()
        .ok_or_else(|| DomainError::validation(T::ENTITY, "id is required"))
}

#[cfg(test)]
mod tests;
