//! Error types for distribution domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or mutating domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DistributionDomainError {
    /// The employee full name is empty after trimming.
    #[error("employee full name must not be empty")]
    EmptyFullName,

    /// The employee full name exceeds the storable length.
    #[error("employee full name '{0}' exceeds 255 characters")]
    FullNameTooLong(String),

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The task is not among the employee's own tasks.
    #[error("task {0} is not assigned to this employee")]
    TaskNotAssigned(TaskId),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing sort directions from caller input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort direction: {0}")]
pub struct ParseSortDirectionError(pub String);
