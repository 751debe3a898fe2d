//! Dining Table Model

use crate::error::{DomainError, DomainResult, Entity};
use crate::models::Validate;
use crate::validation::is_positive;
use serde::{Deserialize, Serialize};

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    /// Assigned by the store on insert
    pub id: Option<i64>,
    pub seats: i32,
    /// Owning restaurant; must exist when the table is added or updated
    pub restaurant_id: i64,
}

/// Value equality; the store-assigned id is not part of identity
impl PartialEq for DiningTable {
    fn eq(&self, other: &Self) -> bool {
        self.seats == other.seats && self.restaurant_id == other.restaurant_id
    }
}

impl Validate for DiningTable {
    fn validate(&self) -> DomainResult<()> {
        if !is_positive(self.seats) {
            return Err(DomainError::validation(
                Entity::DiningTable,
                "seat number is not valid",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_seat_counts_pass() {
        let table = DiningTable {
            id: None,
            seats: 4,
            restaurant_id: 1,
        };
        assert!(table.validate().is_ok());
    }

    #[test]
    fn zero_or_negative_seats_are_rejected() {
        for seats in [0, -1] {
            let table = DiningTable {
                id: None,
                seats,
                restaurant_id: 1,
            };
            assert_eq!(
                table.validate().unwrap_err(),
                DomainError::validation(Entity::DiningTable, "seat number is not valid")
            );
        }
    }
}
