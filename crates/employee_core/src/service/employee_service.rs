//! Employee use-case service.
//!
//! # Responsibility
//! - Apply employee business rules before any write reaches storage.
//! - Translate repository absence into `NotFound` failures.
//!
//! # Invariants
//! - Invalid input never reaches `EmployeeRepository::save`.
//! - Update and delete check existence before anything else, so a missing id
//!   is reported even when the update payload is also invalid.
//! - Update persists the merged existing record, never the raw payload.
//! - Repository failures are returned unchanged.

use crate::model::employee::{Employee, EmployeeId, EmployeeValidationError};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for employee use-cases.
#[derive(Debug)]
pub enum EmployeeServiceError {
    /// Caller-supplied data violates a business rule.
    InvalidArgument(EmployeeValidationError),
    /// Referenced employee does not exist.
    NotFound(EmployeeId),
    /// Persistence-layer failure, passed through as-is.
    Repo(RepoError),
}

impl Display for EmployeeServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "Employee not found with id: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EmployeeServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<EmployeeValidationError> for EmployeeServiceError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::InvalidArgument(value)
    }
}

impl From<RepoError> for EmployeeServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type ServiceResult<T> = Result<T, EmployeeServiceError>;

/// Employee service facade over repository implementations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrows the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates and persists a new employee.
    ///
    /// Returns the repository's stored record, including the assigned id.
    pub fn create_employee(&self, candidate: &Employee) -> ServiceResult<Employee> {
        if let Err(err) = candidate.validate() {
            warn!(
                "event=employee_create module=service status=error error_code={}",
                error_code(err)
            );
            return Err(err.into());
        }

        let saved = self.repo.save(candidate)?;
        info!(
            "event=employee_create module=service status=ok id={}",
            display_id(saved.id)
        );
        Ok(saved)
    }

    /// Gets one employee by id.
    pub fn get_employee_by_id(&self, id: EmployeeId) -> ServiceResult<Employee> {
        self.require_existing(id, "employee_get")
    }

    /// Lists every employee in repository order.
    pub fn get_all_employees(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.repo.find_all()?)
    }

    /// Replaces name, department and salary of an existing employee.
    ///
    /// # Contract
    /// - Missing `id` fails with `NotFound` before `updated` is validated.
    /// - `updated.id` is ignored; the stored id is preserved.
    pub fn update_employee(&self, id: EmployeeId, updated: Employee) -> ServiceResult<Employee> {
        let mut existing = self.require_existing(id, "employee_update")?;

        if let Err(err) = updated.validate() {
            warn!(
                "event=employee_update module=service status=error id={} error_code={}",
                id,
                error_code(err)
            );
            return Err(err.into());
        }

        existing.merge_from(updated);
        let saved = self.repo.save(&existing)?;
        info!("event=employee_update module=service status=ok id={id}");
        Ok(saved)
    }

    /// Deletes an existing employee.
    ///
    /// `EmployeeRepository::delete_by_id` is only called after the existence
    /// check succeeds.
    pub fn delete_employee(&self, id: EmployeeId) -> ServiceResult<()> {
        self.require_existing(id, "employee_delete")?;
        self.repo.delete_by_id(id)?;
        info!("event=employee_delete module=service status=ok id={id}");
        Ok(())
    }

    fn require_existing(&self, id: EmployeeId, event: &str) -> ServiceResult<Employee> {
        match self.repo.find_by_id(id)? {
            Some(employee) => Ok(employee),
            None => {
                warn!("event={event} module=service status=error id={id} error_code=not_found");
                Err(EmployeeServiceError::NotFound(id))
            }
        }
    }
}

fn error_code(err: EmployeeValidationError) -> &'static str {
    match err {
        EmployeeValidationError::BlankName => "blank_name",
        EmployeeValidationError::NonPositiveSalary => "non_positive_salary",
    }
}

fn display_id(id: Option<EmployeeId>) -> String {
    id.map_or_else(|| "none".to_string(), |id| id.to_string())
}
