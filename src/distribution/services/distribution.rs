//! Service layer for listing employees and distributing tasks.

use super::dto::{EmployeeDto, TaskDto};
use crate::distribution::{
    domain::{DistributionDomainError, EmployeeId, SortDirection, Task, TaskId, TaskStatus},
    ports::{EmployeeRepository, EmployeeRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for assigning a new task to an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    description: String,
    status: Option<TaskStatus>,
}

impl NewTaskRequest {
    /// Creates a request with the task description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            status: None,
        }
    }

    /// Sets an explicit initial status instead of the default
    /// [`TaskStatus::New`].
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for task distribution operations.
#[derive(Debug, Error)]
pub enum TaskDistributionError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DistributionDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] EmployeeRepositoryError),
}

/// Result type for task distribution service operations.
pub type TaskDistributionResult<T> = Result<T, TaskDistributionError>;

/// Employee/task orchestration service.
///
/// Wraps an [`EmployeeRepository`] and maps domain aggregates to transfer
/// representations at the boundary. All mutations stamp timestamps through
/// the injected clock.
#[derive(Clone)]
pub struct TaskDistributionService<R, C>
where
    R: EmployeeRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskDistributionService<R, C>
where
    R: EmployeeRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task distribution service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns all employees with their tasks.
    ///
    /// Without a direction employees come back in storage order; with one
    /// they are sorted by full name accordingly.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDistributionError::Repository`] when the listing
    /// fails.
    pub async fn list_employees(
        &self,
        direction: Option<SortDirection>,
    ) -> TaskDistributionResult<Vec<EmployeeDto>> {
        let employees = self.repository.list(direction).await?;
        Ok(employees.iter().map(EmployeeDto::from_domain).collect())
    }

    /// Returns one employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::EmployeeNotFound`] (wrapped)
    /// when no employee has the given identifier.
    pub async fn get_employee(&self, id: EmployeeId) -> TaskDistributionResult<EmployeeDto> {
        let employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeRepositoryError::EmployeeNotFound(id))?;
        Ok(EmployeeDto::from_domain(&employee))
    }

    /// Returns all tasks owned by the given employee.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::EmployeeNotFound`] (wrapped)
    /// when no employee has the given identifier.
    pub async fn tasks_for_employee(
        &self,
        id: EmployeeId,
    ) -> TaskDistributionResult<Vec<TaskDto>> {
        let employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeRepositoryError::EmployeeNotFound(id))?;
        Ok(employee.tasks().iter().map(TaskDto::from_domain).collect())
    }

    /// Changes the status of one of the employee's own tasks.
    ///
    /// The lookup is scoped to the employee's tasks: a task identifier
    /// owned by a different employee fails with `TaskNotFound` rather than
    /// silently mutating another employee's work.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::EmployeeNotFound`] (wrapped)
    /// when the employee does not exist, or
    /// [`EmployeeRepositoryError::TaskNotFound`] (wrapped) when the task
    /// is not one of that employee's tasks.
    pub async fn change_task_status(
        &self,
        employee_id: EmployeeId,
        task_id: TaskId,
        status: TaskStatus,
    ) -> TaskDistributionResult<()> {
        let changed_at = self.clock.utc();
        self.repository
            .change_task_status(employee_id, task_id, status, changed_at)
            .await?;
        tracing::debug!(%employee_id, %task_id, status = status.as_str(), "task status updated");
        Ok(())
    }

    /// Assigns a new task to the given employee.
    ///
    /// The task is constructed from the request data; without an explicit
    /// status it starts as [`TaskStatus::New`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDistributionError::Domain`] when the description is
    /// invalid, or [`EmployeeRepositoryError::EmployeeNotFound`] (wrapped)
    /// when the employee does not exist.
    pub async fn assign_task(
        &self,
        employee_id: EmployeeId,
        request: NewTaskRequest,
    ) -> TaskDistributionResult<TaskDto> {
        let status = request.status.unwrap_or(TaskStatus::New);
        let task = Task::new(request.description, status, &*self.clock)?;
        self.repository.add_task(employee_id, &task).await?;
        tracing::debug!(%employee_id, task_id = %task.id(), "task assigned");
        Ok(TaskDto::from_domain(&task))
    }
}
