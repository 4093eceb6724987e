//! Employee domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep validation rules next to the data they constrain.
//!
//! # Invariants
//! - Every persisted employee is identified by a storage-assigned `EmployeeId`.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod employee;
