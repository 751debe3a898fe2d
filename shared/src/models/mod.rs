//! Domain Models

mod dining_table;
mod reservation;
mod restaurant;
mod user;

pub use dining_table::DiningTable;
pub use reservation::Reservation;
pub use restaurant::Restaurant;
pub use user::{User, UserType};

use crate::error::DomainResult;

/// Field-level validity, checked by the services before any store write
pub trait Validate {
    /// Returns the first failing field as a
    /// [`DomainError::Validation`](crate::error::DomainError::Validation)
    fn validate(&self) -> DomainResult<()>;
}
