//! Shared types for the booking engine
//!
//! Domain models, validation predicates, and error types used across
//! crates.

pub mod error;
pub mod models;
pub mod validation;

// Re-exports
pub use error::{DomainError, DomainResult, Entity};
pub use models::{DiningTable, Reservation, Restaurant, User, UserType, Validate};
pub use serde::{Deserialize, Serialize};
