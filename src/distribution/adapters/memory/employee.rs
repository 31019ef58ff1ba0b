//! In-memory repository for distribution tests and in-process use.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::distribution::{
    domain::{DistributionDomainError, Employee, EmployeeId, SortDirection, Task, TaskId, TaskStatus},
    ports::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult},
};

/// Thread-safe in-memory employee repository.
///
/// Employees are returned in seeding order when no sort direction is
/// given, mirroring the storage-order semantics of the database adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    state: Arc<RwLock<InMemoryEmployeeState>>,
}

#[derive(Debug, Default)]
struct InMemoryEmployeeState {
    employees: HashMap<EmployeeId, Employee>,
    insertion_order: Vec<EmployeeId>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an employee into the repository.
    ///
    /// Employees are provisioned outside the distribution service, so
    /// seeding is an adapter concern rather than a port operation. Seeding
    /// an already-present identifier replaces the stored aggregate without
    /// changing its position in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::Persistence`] when the state
    /// lock is poisoned.
    pub fn seed(&self, employee: Employee) -> EmployeeRepositoryResult<()> {
        let mut state = write_state(&self.state)?;
        if !state.employees.contains_key(&employee.id()) {
            state.insertion_order.push(employee.id());
        }
        state.employees.insert(employee.id(), employee);
        Ok(())
    }
}

fn write_state(
    state: &Arc<RwLock<InMemoryEmployeeState>>,
) -> EmployeeRepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryEmployeeState>> {
    state
        .write()
        .map_err(|err| EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string())))
}

fn read_state(
    state: &Arc<RwLock<InMemoryEmployeeState>>,
) -> EmployeeRepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryEmployeeState>> {
    state
        .read()
        .map_err(|err| EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string())))
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn list(
        &self,
        direction: Option<SortDirection>,
    ) -> EmployeeRepositoryResult<Vec<Employee>> {
        let state = read_state(&self.state)?;
        let mut employees: Vec<Employee> = state
            .insertion_order
            .iter()
            .filter_map(|id| state.employees.get(id).cloned())
            .collect();

        match direction {
            Some(SortDirection::Asc) => {
                employees.sort_by(|a, b| a.fio().cmp(b.fio()));
            }
            Some(SortDirection::Desc) => {
                employees.sort_by(|a, b| b.fio().cmp(a.fio()));
            }
            None => {}
        }

        Ok(employees)
    }

    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>> {
        let state = read_state(&self.state)?;
        Ok(state.employees.get(&id).cloned())
    }

    async fn add_task(
        &self,
        employee_id: EmployeeId,
        task: &Task,
    ) -> EmployeeRepositoryResult<()> {
        let mut state = write_state(&self.state)?;
        let employee = state
            .employees
            .get_mut(&employee_id)
            .ok_or(EmployeeRepositoryError::EmployeeNotFound(employee_id))?;
        employee.add_task(task.clone());
        Ok(())
    }

    async fn change_task_status(
        &self,
        employee_id: EmployeeId,
        task_id: TaskId,
        status: TaskStatus,
        changed_at: DateTime<Utc>,
    ) -> EmployeeRepositoryResult<()> {
        let mut state = write_state(&self.state)?;
        let employee = state
            .employees
            .get_mut(&employee_id)
            .ok_or(EmployeeRepositoryError::EmployeeNotFound(employee_id))?;
        employee
            .change_task_status(task_id, status, changed_at)
            .map_err(|err| match err {
                DistributionDomainError::TaskNotAssigned(id) => {
                    EmployeeRepositoryError::TaskNotFound(id)
                }
                other => EmployeeRepositoryError::persistence(other),
            })
    }
}
