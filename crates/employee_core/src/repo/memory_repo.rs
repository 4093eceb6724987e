//! In-process employee repository.
//!
//! # Responsibility
//! - Back the service with process-local storage for tests and tooling.
//!
//! # Invariants
//! - Assigned ids start at 1 and are never reused, even after deletes.
//! - `find_all` yields records in ascending id order.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoError, RepoResult};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug)]
struct MemoryState {
    next_id: EmployeeId,
    records: BTreeMap<EmployeeId, Employee>,
}

/// `BTreeMap`-backed repository guarded by a mutex.
#[derive(Debug)]
pub struct InMemoryEmployeeRepository {
    state: Mutex<MemoryState>,
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> RepoResult<usize> {
        Ok(self.lock()?.records.len())
    }

    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| RepoError::Storage("in-memory employee store lock poisoned".to_string()))
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        let mut state = self.lock()?;
        let id = match employee.id {
            Some(id) => id,
            None => state.next_id,
        };
        if id >= state.next_id {
            state.next_id = id.saturating_add(1);
        }

        let mut stored = employee.clone();
        stored.id = Some(id);
        state.records.insert(id, stored.clone());
        Ok(stored)
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        Ok(self.lock()?.records.get(&id).cloned())
    }

    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.lock()?.records.values().cloned().collect())
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        self.lock()?.records.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryEmployeeRepository;
    use crate::model::employee::Employee;
    use crate::repo::employee_repo::EmployeeRepository;

    #[test]
    fn save_assigns_sequential_ids() {
        let repo = InMemoryEmployeeRepository::new();

        let first = repo
            .save(&Employee::new("John Doe", "Engineering", 50_000.0))
            .unwrap();
        let second = repo
            .save(&Employee::new("Jane Smith", "Marketing", 60_000.0))
            .unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.len().unwrap(), 2);
    }

    #[test]
    fn explicit_id_moves_counter_forward() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save(&Employee::with_id(10, "Seeded", "Ops", 1.0))
            .unwrap();

        let next = repo.save(&Employee::new("Next", "Ops", 1.0)).unwrap();
        assert_eq!(next.id, Some(11));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let repo = InMemoryEmployeeRepository::new();
        let saved = repo.save(&Employee::new("Temp", "Ops", 1.0)).unwrap();
        repo.delete_by_id(saved.id.unwrap()).unwrap();

        let next = repo.save(&Employee::new("Next", "Ops", 1.0)).unwrap();
        assert_eq!(next.id, Some(2));
        assert!(repo.find_by_id(1).unwrap().is_none());
    }

    #[test]
    fn delete_missing_id_is_noop() {
        let repo = InMemoryEmployeeRepository::new();
        repo.delete_by_id(999).unwrap();
        assert!(repo.is_empty().unwrap());
    }
}
