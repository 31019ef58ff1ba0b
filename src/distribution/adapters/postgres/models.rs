//! Diesel row models for employee and task persistence.

use super::schema::{employees, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for employee records.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmployeeRow {
    /// Employee identifier.
    pub id: uuid::Uuid,
    /// Employee full name.
    pub fio: String,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = tasks)]
#[diesel(belongs_to(EmployeeRow, foreign_key = employee_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning employee identifier.
    pub employee_id: uuid::Uuid,
    /// Task description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last status-change timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning employee identifier.
    pub employee_id: uuid::Uuid,
    /// Task description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last status-change timestamp.
    pub updated_at: DateTime<Utc>,
}
