//! Employee domain model.
//!
//! # Responsibility
//! - Define the single persisted record handled by core.
//! - Own the business rules checked at create/update boundaries.
//!
//! # Invariants
//! - `id` is assigned by storage and never changed by merges.
//! - A written record has a non-blank `name` and `salary > 0`.
//! - Validation checks `name` before `salary`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned identifier for an employee record.
pub type EmployeeId = i64;

/// Business-rule violation found by [`Employee::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// `name` is missing, empty, or whitespace only.
    BlankName,
    /// `salary` is missing, zero, negative, or NaN.
    NonPositiveSalary,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "Employee name cannot be null or empty"),
            Self::NonPositiveSalary => write!(f, "Employee salary must be greater than 0"),
        }
    }
}

impl Error for EmployeeValidationError {}

/// Employee record as exchanged between service, repositories and callers.
///
/// Fields stay optional so that incomplete caller input can be represented
/// and rejected by validation instead of at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// `None` until storage assigns an identity.
    pub id: Option<EmployeeId>,
    pub name: Option<String>,
    /// Free-form, never validated.
    pub department: Option<String>,
    pub salary: Option<f64>,
}

impl Employee {
    /// Creates an unsaved employee with all business fields set.
    pub fn new(name: impl Into<String>, department: impl Into<String>, salary: f64) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            department: Some(department.into()),
            salary: Some(salary),
        }
    }

    /// Creates an employee carrying an already assigned identity.
    ///
    /// Used by repositories when materializing stored rows.
    pub fn with_id(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, department, salary)
        }
    }

    /// Checks the create/update business rules.
    ///
    /// # Errors
    /// - [`EmployeeValidationError::BlankName`] when `name` is absent or blank
    ///   after trimming. Reported even if `salary` is also invalid.
    /// - [`EmployeeValidationError::NonPositiveSalary`] when `salary` is absent
    ///   or not strictly greater than zero.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => {}
            _ => return Err(EmployeeValidationError::BlankName),
        }

        match self.salary {
            Some(salary) if salary > 0.0 => Ok(()),
            _ => Err(EmployeeValidationError::NonPositiveSalary),
        }
    }

    /// Replaces the mutable fields with those of `updated`.
    ///
    /// `self.id` is kept; `updated.id` is ignored.
    pub fn merge_from(&mut self, updated: Employee) {
        self.name = updated.name;
        self.department = updated.department;
        self.salary = updated.salary;
    }
}

#[cfg(test)]
mod tests {
    use super::{Employee, EmployeeValidationError};

    #[test]
    fn validate_accepts_complete_record() {
        let employee = Employee::new("John Doe", "Engineering", 50_000.0);
        assert_eq!(employee.validate(), Ok(()));
    }

    #[test]
    fn validate_reports_name_before_salary() {
        let employee = Employee {
            id: None,
            name: Some("   ".to_string()),
            department: None,
            salary: Some(-1.0),
        };
        assert_eq!(employee.validate(), Err(EmployeeValidationError::BlankName));
    }

    #[test]
    fn validate_rejects_nan_salary() {
        let employee = Employee::new("John Doe", "Engineering", f64::NAN);
        assert_eq!(
            employee.validate(),
            Err(EmployeeValidationError::NonPositiveSalary)
        );
    }

    #[test]
    fn merge_keeps_existing_id() {
        let mut existing = Employee::with_id(1, "John Doe", "Engineering", 50_000.0);
        let updated = Employee::with_id(42, "Jane Smith", "Marketing", 60_000.0);

        existing.merge_from(updated);

        assert_eq!(existing.id, Some(1));
        assert_eq!(existing.name.as_deref(), Some("Jane Smith"));
        assert_eq!(existing.department.as_deref(), Some("Marketing"));
        assert_eq!(existing.salary, Some(60_000.0));
    }
}
