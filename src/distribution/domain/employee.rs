//! Employee aggregate root owning assigned tasks.

use super::{DistributionDomainError, EmployeeId, FullName, Task, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee aggregate root.
///
/// An employee owns its tasks by composition: every task reachable through
/// the aggregate belongs to this employee and no other. Task mutation goes
/// through the aggregate so ownership is checked on every status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    fio: FullName,
    tasks: Vec<Task>,
}

/// Parameter object for reconstructing a persisted employee aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedEmployeeData {
    /// Persisted employee identifier.
    pub id: EmployeeId,
    /// Persisted full name.
    pub fio: FullName,
    /// Persisted tasks owned by the employee.
    pub tasks: Vec<Task>,
}

impl Employee {
    /// Creates a new employee with no assigned tasks.
    ///
    /// Employees are provisioned outside the distribution service; this
    /// constructor exists for seeding and fixtures.
    #[must_use]
    pub fn new(fio: FullName) -> Self {
        Self {
            id: EmployeeId::new(),
            fio,
            tasks: Vec::new(),
        }
    }

    /// Reconstructs an employee from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedEmployeeData) -> Self {
        Self {
            id: data.id,
            fio: data.fio,
            tasks: data.tasks,
        }
    }

    /// Returns the employee identifier.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the employee full name.
    #[must_use]
    pub const fn fio(&self) -> &FullName {
        &self.fio
    }

    /// Returns the tasks owned by this employee.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the owned task with the given identifier, if any.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Attaches a new task to this employee.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Changes the status of one of this employee's own tasks.
    ///
    /// The lookup is scoped to the aggregate: a task identifier belonging
    /// to a different employee is rejected rather than silently mutated.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionDomainError::TaskNotAssigned`] when the task
    /// is not among this employee's tasks.
    pub fn change_task_status(
        &mut self,
        task_id: TaskId,
        status: TaskStatus,
        changed_at: DateTime<Utc>,
    ) -> Result<(), DistributionDomainError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == task_id)
            .ok_or(DistributionDomainError::TaskNotAssigned(task_id))?;
        task.set_status(status, changed_at);
        Ok(())
    }
}
