//! Reservation Model

use crate::error::{DomainError, DomainResult, Entity};
use crate::models::Validate;
use crate::validation::is_multiple_of_half_hour;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Reservation entity
///
/// Field validity covers only the slot alignment; the opening-hours rule
/// needs the owning restaurant and lives in the service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Assigned by the store on insert
    pub id: Option<i64>,
    /// Booking user; must exist when the reservation is added or updated
    pub user_id: i64,
    /// Reserved table; must exist when the reservation is added or updated
    pub table_id: i64,
    pub time: NaiveTime,
    pub date: NaiveDate,
}

/// Value equality; the store-assigned id is not part of identity
impl PartialEq for Reservation {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
            && self.table_id == other.table_id
            && self.time == other.time
            && self.date == other.date
    }
}

impl Validate for Reservation {
    fn validate(&self) -> DomainResult<()> {
        if !is_multiple_of_half_hour(self.time) {
            return Err(DomainError::validation(
                Entity::Reservation,
                "time is not valid",
            ));
        }
        Ok(())
    }
}
