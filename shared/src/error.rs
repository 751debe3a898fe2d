//! Domain error types
//!
//! Two recoverable failure kinds cover the whole model: a field or business
//! rule rejected the entity, or an id pointed at nothing. Both name the
//! entity kind through [`Entity`] so callers can match on the type without
//! parsing messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Entity kind carried in error payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    User,
    Restaurant,
    DiningTable,
    Reservation,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::User => "User",
            Entity::Restaurant => "Restaurant",
            Entity::DiningTable => "DiningTable",
            Entity::Reservation => "Reservation",
        };
        f.write_str(name)
    }
}

/// Recoverable domain failures
///
/// Failures are synchronous and propagate to the immediate caller. A
/// rejected mutation leaves the store untouched, so there is nothing to
/// roll back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A field-level rule or business rule rejected the entity
    #[error("{entity}: {reason}")]
    Validation { entity: Entity, reason: String },

    /// The id does not refer to a stored entity of this kind
    #[error("there is no {entity} with id {id}")]
    NotFound { entity: Entity, id: i64 },
}

impl DomainError {
    /// Create a validation error with a field-specific reason
    pub fn validation(entity: Entity, reason: impl Into<String>) -> Self {
        Self::Validation {
            entity,
            reason: reason.into(),
        }
    }

    /// Create a not-found error naming the missing entity
    pub fn not_found(entity: Entity, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
