//! Core domain logic for employee records.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeId, EmployeeValidationError};
pub use repo::employee_repo::{EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository};
pub use repo::memory_repo::InMemoryEmployeeRepository;
pub use service::employee_service::{EmployeeService, EmployeeServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
