//! User Model

use crate::error::{DomainError, DomainResult, Entity};
use crate::models::Validate;
use crate::validation::{is_email, is_not_empty};
use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Standard,
    Moderator,
    Admin,
}

/// User account entity
///
/// Passwords are stored and compared in plaintext; `login` and
/// `change_password` in the service layer do exact string comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on insert
    pub id: Option<i64>,
    pub email: String,
    pub password: String,
    pub is_active: bool,
    pub user_type: UserType,
}

/// Value equality; the store-assigned id is not part of identity
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
            && self.password == other.password
            && self.is_active == other.is_active
            && self.user_type == other.user_type
    }
}

impl Validate for User {
    fn validate(&self) -> DomainResult<()> {
        if !(is_not_empty(&self.email) && is_email(&self.email)) {
            return Err(DomainError::validation(Entity::User, "email is not valid"));
        }
        if !is_not_empty(&self.password) {
            return Err(DomainError::validation(Entity::User, "password is not valid"));
        }
        Ok(())
    }
}
