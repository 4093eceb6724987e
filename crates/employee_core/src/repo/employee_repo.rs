//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the save/find/delete contract consumed by `EmployeeService`.
//! - Keep SQL details inside core persistence boundary.
//!
//! # Invariants
//! - `save` assigns an id when the record has none and keeps it otherwise.
//! - `delete_by_id` is a no-op on a missing id.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    name,
    department,
    salary
FROM employees";

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage failure raised by repository implementations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A stored row does not satisfy the employee model.
    InvalidData(String),
    /// Non-SQL backend failure (e.g. a poisoned in-memory store).
    Storage(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted employee data: {message}"),
            Self::Storage(message) => write!(f, "employee storage failure: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::Storage(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for employee persistence.
pub trait EmployeeRepository {
    /// Persists a new or existing record and returns the stored version.
    fn save(&self, employee: &Employee) -> RepoResult<Employee>;
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Returns every stored record in implementation-defined order.
    fn find_all(&self) -> RepoResult<Vec<Employee>>;
    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()>;
}

impl<R: EmployeeRepository + ?Sized> EmployeeRepository for &R {
    fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        (**self).save(employee)
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        (**self).find_all()
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        (**self).delete_by_id(id)
    }
}

/// SQLite-backed employee repository.
///
/// Expects a connection returned by `db::open_db*`, so the `employees` table
/// already exists.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        let id = match employee.id {
            None => {
                self.conn.execute(
                    "INSERT INTO employees (name, department, salary)
                     VALUES (?1, ?2, ?3);",
                    params![
                        employee.name.as_deref(),
                        employee.department.as_deref(),
                        employee.salary,
                    ],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO employees (id, name, department, salary)
                     VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        department = excluded.department,
                        salary = excluded.salary;",
                    params![
                        id,
                        employee.name.as_deref(),
                        employee.department.as_deref(),
                        employee.salary,
                    ],
                )?;
                id
            }
        };

        self.find_by_id(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("saved employee {id} missing in read-back"))
        })
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM employees WHERE id = ?1;", params![id])?;
        Ok(())
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let id: EmployeeId = row.get("id")?;
    let employee = Employee {
        id: Some(id),
        name: row.get("name")?,
        department: row.get("department")?,
        salary: row.get("salary")?,
    };

    employee
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("row {id} in employees: {err}")))?;

    Ok(employee)
}
