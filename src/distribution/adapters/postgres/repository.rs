//! `PostgreSQL` repository implementation for employee and task storage.

use super::{
    models::{EmployeeRow, NewTaskRow, TaskRow},
    schema::{employees, tasks},
};
use crate::distribution::{
    domain::{
        Employee, EmployeeId, FullName, PersistedEmployeeData, PersistedTaskData, SortDirection,
        Task, TaskId, TaskStatus,
    },
    ports::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;

/// `PostgreSQL` connection pool type used by distribution adapters.
pub type EmployeePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed employee repository.
///
/// Uses Diesel with connection pooling via r2d2. All database operations
/// are offloaded to a blocking thread pool via
/// [`tokio::task::spawn_blocking`] to avoid blocking the async runtime.
/// Mutating operations run inside a single transaction so the employee
/// lookup and the task mutation commit or roll back together.
///
/// # Example
///
/// ```ignore
/// use diesel::r2d2::{ConnectionManager, Pool};
/// use diesel::PgConnection;
/// use taskdist::distribution::adapters::postgres::PostgresEmployeeRepository;
///
/// let manager = ConnectionManager::<PgConnection>::new("postgres://...");
/// let pool = Pool::builder().build(manager).expect("pool");
/// let repo = PostgresEmployeeRepository::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pool: EmployeePgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: EmployeePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> EmployeeRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> EmployeeRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(EmployeeRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(EmployeeRepositoryError::persistence)?
    }
}

impl From<DieselError> for EmployeeRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn list(
        &self,
        direction: Option<SortDirection>,
    ) -> EmployeeRepositoryResult<Vec<Employee>> {
        self.run_blocking(move |connection| {
            let base = employees::table.select(EmployeeRow::as_select());
            let employee_rows: Vec<EmployeeRow> = match direction {
                Some(SortDirection::Asc) => {
                    base.order(employees::fio.asc()).load(connection)
                }
                Some(SortDirection::Desc) => {
                    base.order(employees::fio.desc()).load(connection)
                }
                None => base.load(connection),
            }
            .map_err(EmployeeRepositoryError::persistence)?;

            let task_rows: Vec<TaskRow> = TaskRow::belonging_to(&employee_rows)
                .select(TaskRow::as_select())
                .order(tasks::created_at.asc())
                .load(connection)
                .map_err(EmployeeRepositoryError::persistence)?;

            task_rows
                .grouped_by(&employee_rows)
                .into_iter()
                .zip(employee_rows)
                .map(|(task_group, employee_row)| rows_to_employee(employee_row, task_group))
                .collect()
        })
        .await
    }

    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>> {
        self.run_blocking(move |connection| {
            let employee_row = employees::table
                .filter(employees::id.eq(id.into_inner()))
                .select(EmployeeRow::as_select())
                .first::<EmployeeRow>(connection)
                .optional()
                .map_err(EmployeeRepositoryError::persistence)?;

            let Some(employee_row) = employee_row else {
                return Ok(None);
            };

            let task_rows: Vec<TaskRow> = tasks::table
                .filter(tasks::employee_id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .order(tasks::created_at.asc())
                .load(connection)
                .map_err(EmployeeRepositoryError::persistence)?;

            rows_to_employee(employee_row, task_rows).map(Some)
        })
        .await
    }

    async fn add_task(
        &self,
        employee_id: EmployeeId,
        task: &Task,
    ) -> EmployeeRepositoryResult<()> {
        let new_row = to_new_task_row(employee_id, task);

        self.run_blocking(move |connection| {
            connection.transaction::<_, EmployeeRepositoryError, _>(|tx_conn| {
                ensure_employee_exists(tx_conn, employee_id)?;
                diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .execute(tx_conn)?;
                Ok(())
            })
        })
        .await?;

        tracing::debug!(%employee_id, task_id = %task.id(), "task attached to employee");
        Ok(())
    }

    async fn change_task_status(
        &self,
        employee_id: EmployeeId,
        task_id: TaskId,
        status: TaskStatus,
        changed_at: DateTime<Utc>,
    ) -> EmployeeRepositoryResult<()> {
        self.run_blocking(move |connection| {
            connection.transaction::<_, EmployeeRepositoryError, _>(|tx_conn| {
                ensure_employee_exists(tx_conn, employee_id)?;

                // The filter scopes the update to the employee's own tasks;
                // a task owned by another employee matches zero rows.
                let updated_count = diesel::update(
                    tasks::table
                        .filter(tasks::id.eq(task_id.into_inner()))
                        .filter(tasks::employee_id.eq(employee_id.into_inner())),
                )
                .set((
                    tasks::status.eq(status.as_str()),
                    tasks::updated_at.eq(changed_at),
                ))
                .execute(tx_conn)?;

                if updated_count == 0 {
                    return Err(EmployeeRepositoryError::TaskNotFound(task_id));
                }
                Ok(())
            })
        })
        .await?;

        tracing::debug!(%employee_id, %task_id, status = status.as_str(), "task status changed");
        Ok(())
    }
}

fn ensure_employee_exists(
    connection: &mut PgConnection,
    employee_id: EmployeeId,
) -> EmployeeRepositoryResult<()> {
    let found = employees::table
        .filter(employees::id.eq(employee_id.into_inner()))
        .select(employees::id)
        .first::<uuid::Uuid>(connection)
        .optional()
        .map_err(EmployeeRepositoryError::persistence)?;

    if found.is_none() {
        return Err(EmployeeRepositoryError::EmployeeNotFound(employee_id));
    }
    Ok(())
}

fn to_new_task_row(employee_id: EmployeeId, task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        employee_id: employee_id.into_inner(),
        description: task.description().to_owned(),
        status: task.status().as_str().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> EmployeeRepositoryResult<Task> {
    let status = TaskStatus::try_from(row.status.as_str())
        .map_err(EmployeeRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        description: row.description,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

fn rows_to_employee(
    employee_row: EmployeeRow,
    task_rows: Vec<TaskRow>,
) -> EmployeeRepositoryResult<Employee> {
    let fio = FullName::new(employee_row.fio).map_err(EmployeeRepositoryError::persistence)?;
    let employee_tasks = task_rows
        .into_iter()
        .map(row_to_task)
        .collect::<EmployeeRepositoryResult<Vec<Task>>>()?;

    Ok(Employee::from_persisted(PersistedEmployeeData {
        id: EmployeeId::from_uuid(employee_row.id),
        fio,
        tasks: employee_tasks,
    }))
}
