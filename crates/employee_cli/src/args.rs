//! CLI argument structures.

use clap::{Args, Parser, Subcommand};
use employee_core::{Employee, EmployeeId};
use std::path::PathBuf;

/// Manage employee records stored in a local SQLite database
#[derive(Debug, Parser)]
#[command(name = "employee_cli")]
#[command(version, long_about = None)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "EMPLOYEE_DB", default_value = "employees.db")]
    pub db: PathBuf,

    /// Log level: trace|debug|info|warn|error
    #[arg(
        long,
        global = true,
        env = "EMPLOYEE_LOG_LEVEL",
        default_value = employee_core::default_log_level()
    )]
    pub log_level: String,

    /// Absolute directory for rotated log files; logging is off when unset
    #[arg(long, global = true, env = "EMPLOYEE_LOG_DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an employee
    Create(EmployeeFields),
    /// Show one employee
    Get { id: EmployeeId },
    /// List all employees
    List,
    /// Replace name, department and salary of an employee
    Update {
        id: EmployeeId,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Delete an employee
    Delete { id: EmployeeId },
    /// Check that the core library is linked
    Ping,
}

/// Employee fields as typed by the user. Missing values are passed through so
/// the service reports them.
#[derive(Debug, Clone, Args)]
pub struct EmployeeFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub department: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub salary: Option<f64>,
}

impl From<EmployeeFields> for Employee {
    fn from(fields: EmployeeFields) -> Self {
        Employee {
            id: None,
            name: fields.name,
            department: fields.department,
            salary: fields.salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use employee_core::Employee;

    #[test]
    fn parses_update_with_partial_fields() {
        let cli = Cli::try_parse_from([
            "employee_cli",
            "--db",
            "/tmp/staff.db",
            "update",
            "7",
            "--name",
            "Jane Smith",
            "--salary",
            "-5",
        ])
        .unwrap();

        assert_eq!(cli.db.to_str(), Some("/tmp/staff.db"));
        match cli.command {
            Command::Update { id, fields } => {
                assert_eq!(id, 7);
                let employee = Employee::from(fields);
                assert_eq!(employee.name.as_deref(), Some("Jane Smith"));
                assert_eq!(employee.department, None);
                assert_eq!(employee.salary, Some(-5.0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["employee_cli", "get", "abc"]).is_err());
    }
}
