use employee_core::db::DbError;
use employee_core::EmployeeServiceError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure of one CLI invocation.
#[derive(Debug)]
pub enum CliError {
    Db(DbError),
    Service(EmployeeServiceError),
    Output(serde_json::Error),
}

impl CliError {
    /// Process exit status: 2 for rejected input, 3 for a missing record, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Service(EmployeeServiceError::InvalidArgument(_)) => 2,
            Self::Service(EmployeeServiceError::NotFound(_)) => 3,
            _ => 1,
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "failed to open database: {err}"),
            Self::Service(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to render output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Service(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<EmployeeServiceError> for CliError {
    fn from(value: EmployeeServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

#[cfg(test)]
mod tests {
    use super::CliError;
    use employee_core::{EmployeeServiceError, EmployeeValidationError};

    #[test]
    fn exit_codes_follow_failure_kind() {
        let invalid = CliError::from(EmployeeServiceError::InvalidArgument(
            EmployeeValidationError::BlankName,
        ));
        let missing = CliError::from(EmployeeServiceError::NotFound(999));

        assert_eq!(invalid.exit_code(), 2);
        assert_eq!(missing.exit_code(), 3);
        assert_eq!(missing.to_string(), "Employee not found with id: 999");
    }
}
