//! Booking engine
//!
//! In-memory keyed store, JSON snapshot persistence, and the per-entity
//! service layer for the table-reservation domain. Everything is
//! single-threaded and synchronous; mutation goes through `&mut Database`,
//! so the borrow checker serializes writers.

pub mod common;
pub mod db;
pub mod services;

// Re-exports
pub use db::{Database, Record};
