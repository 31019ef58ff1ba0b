//! Transfer representations exposed at the service boundary.
//!
//! These are plain data structures decoupled from the storage entities'
//! internal shape. Conversion from the domain aggregates is explicit and
//! field-by-field rather than reflection-driven.

use crate::distribution::domain::{Employee, EmployeeId, Task, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// Transfer representation of an assigned task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDto {
    /// Task identifier.
    pub id: TaskId,
    /// Task description.
    pub description: String,
    /// Task lifecycle status.
    pub status: TaskStatus,
}

impl TaskDto {
    /// Converts a domain task into its transfer representation.
    #[must_use]
    pub fn from_domain(task: &Task) -> Self {
        Self {
            id: task.id(),
            description: task.description().to_owned(),
            status: task.status(),
        }
    }
}

/// Transfer representation of an employee with their assigned tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    /// Employee identifier.
    pub id: EmployeeId,
    /// Employee full name.
    pub fio: String,
    /// Tasks owned by the employee.
    pub tasks: Vec<TaskDto>,
}

impl EmployeeDto {
    /// Converts a domain employee into its transfer representation.
    #[must_use]
    pub fn from_domain(employee: &Employee) -> Self {
        Self {
            id: employee.id(),
            fio: employee.fio().as_str().to_owned(),
            tasks: employee.tasks().iter().map(TaskDto::from_domain).collect(),
        }
    }
}
