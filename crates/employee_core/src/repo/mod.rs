//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract consumed by the employee service.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Absence is reported as `Ok(None)`, never as an error.
//! - Repository errors describe storage failures only; business-rule
//!   failures belong to the service layer.

pub mod employee_repo;
pub mod memory_repo;
