//! Task entity owned by an employee.

use super::{DistributionDomainError, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work assigned to exactly one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted description.
    pub description: String,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with the given description and status.
    ///
    /// The description is trimmed before storage.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionDomainError::EmptyDescription`] when the
    /// description is empty after trimming.
    pub fn new(
        description: impl Into<String>,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Result<Self, DistributionDomainError> {
        let raw = description.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(DistributionDomainError::EmptyDescription);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            description: normalized.to_owned(),
            status,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets the task status, stamping the mutation time.
    pub fn set_status(&mut self, status: TaskStatus, changed_at: DateTime<Utc>) {
        self.status = status;
        self.updated_at = changed_at;
    }
}
