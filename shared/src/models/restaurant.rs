//! Restaurant Model

use crate::error::{DomainError, DomainResult, Entity};
use crate::models::Validate;
use crate::validation::{is_multiple_of_half_hour, is_not_empty};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Restaurant entity
///
/// Opening hours sit on half-hour boundaries. `open_hour` is conceptually
/// before `close_hour`; the model does not enforce the ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    /// Assigned by the store on insert
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    pub open_hour: NaiveTime,
    /// End of service, exclusive for reservations
    pub close_hour: NaiveTime,
}

/// Value equality; the store-assigned id is not part of identity
impl PartialEq for Restaurant {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.address == other.address
            && self.open_hour == other.open_hour
            && self.close_hour == other.close_hour
    }
}

impl Validate for Restaurant {
    fn validate(&self) -> DomainResult<()> {
        if !is_not_empty(&self.name) {
            return Err(DomainError::validation(
                Entity::Restaurant,
                "name is not valid",
            ));
        }
        if !is_not_empty(&self.address) {
            return Err(DomainError::validation(
                Entity::Restaurant,
                "address is not valid",
            ));
        }
        if !is_multiple_of_half_hour(self.open_hour) {
            return Err(DomainError::validation(
                Entity::Restaurant,
                "open hour is not valid",
            ));
        }
        if !is_multiple_of_half_hour(self.close_hour) {
            return Err(DomainError::validation(
                Entity::Restaurant,
                "close hour is not valid",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn restaurant() -> Restaurant {
        Restaurant {
            id: None,
            name: "Trattoria".to_string(),
            address: "Via Roma 1".to_string(),
            open_hour: t(9, 30),
            close_hour: t(22, 0),
        }
    }

    #[test]
    fn valid_restaurant_passes() {
        assert!(restaurant().validate().is_ok());
    }

    #[test]
    fn empty_name_and_address_are_rejected() {
        let mut r = restaurant();
        r.name.clear();
        assert_eq!(
            r.validate().unwrap_err(),
            DomainError::validation(Entity::Restaurant, "name is not valid")
        );

        let mut r = restaurant();
        r.address.clear();
        assert_eq!(
            r.validate().unwrap_err(),
            DomainError::validation(Entity::Restaurant, "address is not valid")
        );
    }

    #[test]
    fn misaligned_hours_are_rejected() {
        let mut r = restaurant();
        r.open_hour = NaiveTime::from_hms_opt(9, 15, 0).unwrap();
        assert_eq!(
            r.validate().unwrap_err(),
            DomainError::validation(Entity::Restaurant, "open hour is not valid")
        );

        let mut r = restaurant();
        r.close_hour = NaiveTime::from_hms_opt(22, 0, 30).unwrap();
        assert_eq!(
            r.validate().unwrap_err(),
            DomainError::validation(Entity::Restaurant, "close hour is not valid")
        );
    }
}
