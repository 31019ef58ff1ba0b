//! Repository port for employee and task persistence.

use crate::distribution::domain::{Employee, EmployeeId, SortDirection, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for employee repository operations.
pub type EmployeeRepositoryResult<T> = Result<T, EmployeeRepositoryError>;

/// Employee and task persistence contract.
///
/// Mutating operations are atomic: the employee lookup and the task
/// mutation either both apply or nothing is persisted.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Returns all employees with their tasks.
    ///
    /// `None` returns employees in storage order; `Some` sorts by full
    /// name in the given direction.
    async fn list(
        &self,
        direction: Option<SortDirection>,
    ) -> EmployeeRepositoryResult<Vec<Employee>>;

    /// Finds an employee by identifier.
    ///
    /// Returns `None` when the employee does not exist.
    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>>;

    /// Attaches a new task to the given employee.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::EmployeeNotFound`] when the
    /// employee does not exist.
    async fn add_task(&self, employee_id: EmployeeId, task: &Task)
    -> EmployeeRepositoryResult<()>;

    /// Changes the status of a task among the given employee's own tasks.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::EmployeeNotFound`] when the
    /// employee does not exist, or [`EmployeeRepositoryError::TaskNotFound`]
    /// when the task is not one of that employee's tasks.
    async fn change_task_status(
        &self,
        employee_id: EmployeeId,
        task_id: TaskId,
        status: TaskStatus,
        changed_at: DateTime<Utc>,
    ) -> EmployeeRepositoryResult<()>;
}

/// Errors returned by employee repository implementations.
#[derive(Debug, Clone, Error)]
pub enum EmployeeRepositoryError {
    /// No employee exists with the given identifier.
    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// The task was not found among the employee's tasks.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl EmployeeRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
