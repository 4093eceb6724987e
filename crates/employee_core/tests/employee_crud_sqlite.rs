use employee_core::db::open_db_in_memory;
use employee_core::{
    Employee, EmployeeRepository, EmployeeService, EmployeeServiceError, RepoError,
    SqliteEmployeeRepository,
};

#[test]
fn save_assigns_id_and_reads_back() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let saved = repo
        .save(&Employee::new("John Doe", "Engineering", 50_000.0))
        .unwrap();

    assert_eq!(saved.id, Some(1));
    let loaded = repo.find_by_id(1).unwrap().unwrap();
    assert_eq!(loaded, saved);
}

#[test]
fn save_with_existing_id_updates_in_place() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    let mut saved = repo
        .save(&Employee::new("John Doe", "Engineering", 50_000.0))
        .unwrap();

    saved.salary = Some(55_000.0);
    saved.department = None;
    let updated = repo.save(&saved).unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.salary, Some(55_000.0));
    assert_eq!(updated.department, None);
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[test]
fn find_all_orders_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    for (name, salary) in [("A", 1.0), ("B", 2.0), ("C", 3.0)] {
        repo.save(&Employee::new(name, "Ops", salary)).unwrap();
    }

    let ids: Vec<_> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|employee| employee.id.unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn find_missing_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    assert!(repo.find_by_id(999).unwrap().is_none());
}

#[test]
fn delete_removes_row_and_ignores_missing_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    let saved = repo.save(&Employee::new("Temp", "Ops", 1.0)).unwrap();

    repo.delete_by_id(saved.id.unwrap()).unwrap();
    repo.delete_by_id(999).unwrap();

    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn schema_rejects_rows_that_bypass_validation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let blank = Employee {
        name: Some("  ".to_string()),
        ..Employee::new("x", "Ops", 1.0)
    };
    assert!(matches!(repo.save(&blank).unwrap_err(), RepoError::Db(_)));

    let unpaid = Employee::new("Unpaid", "Ops", 0.0);
    assert!(matches!(repo.save(&unpaid).unwrap_err(), RepoError::Db(_)));

    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn service_over_sqlite_runs_full_lifecycle() {
    let conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(SqliteEmployeeRepository::new(&conn));

    let created = service
        .create_employee(&Employee::new("John Doe", "Engineering", 50_000.0))
        .unwrap();
    let id = created.id.unwrap();

    let updated = service
        .update_employee(id, Employee::new("Jane Smith", "Marketing", 60_000.0))
        .unwrap();
    assert_eq!(
        updated,
        Employee::with_id(id, "Jane Smith", "Marketing", 60_000.0)
    );
    assert_eq!(service.get_employee_by_id(id).unwrap(), updated);

    service.delete_employee(id).unwrap();
    let err = service.get_employee_by_id(id).unwrap_err();
    assert!(matches!(err, EmployeeServiceError::NotFound(missing) if missing == id));
    assert!(service.get_all_employees().unwrap().is_empty());
}

#[test]
fn corrupted_row_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    // Drop the CHECK constraints to simulate storage written by another tool.
    conn.execute_batch(
        "DROP TABLE employees;
         CREATE TABLE employees (
             id INTEGER PRIMARY KEY,
             name TEXT NOT NULL,
             department TEXT,
             salary REAL NOT NULL
         );
         INSERT INTO employees (id, name, department, salary) VALUES (7, 'Ghost', NULL, -1.0);",
    )
    .unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let err = repo.find_by_id(7).unwrap_err();
    match err {
        RepoError::InvalidData(message) => {
            assert!(message.contains("row 7"), "unexpected message: {message}");
            assert!(message.contains("Employee salary must be greater than 0"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
