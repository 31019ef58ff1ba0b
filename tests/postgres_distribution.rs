//! `PostgreSQL` integration tests for the task distribution service.
//!
//! Requires a reachable database with DDL privileges: set
//! `TASKDIST_TEST_DATABASE_URL` to a connection string to run the suite.
//! When the variable is unset the suite is skipped, so the default test
//! run stays hermetic.

use std::sync::Arc;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use mockable::DefaultClock;
use taskdist::distribution::{
    adapters::postgres::{EmployeePgPool, PostgresEmployeeRepository},
    domain::{EmployeeId, SortDirection, TaskId, TaskStatus},
    ports::EmployeeRepositoryError,
    services::{NewTaskRequest, TaskDistributionError, TaskDistributionService},
};

const SCHEMA_SQL: &str = "
    DROP TABLE IF EXISTS tasks;
    DROP TABLE IF EXISTS employees;
    CREATE TABLE employees (
        id UUID PRIMARY KEY,
        fio VARCHAR(255) NOT NULL
    );
    CREATE TABLE tasks (
        id UUID PRIMARY KEY,
        employee_id UUID NOT NULL REFERENCES employees (id),
        description TEXT NOT NULL,
        status VARCHAR(50) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    );
";

fn test_pool() -> Option<EmployeePgPool> {
    let database_url = std::env::var("TASKDIST_TEST_DATABASE_URL").ok()?;
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().max_size(2).build(manager).ok()
}

fn seed_employee(pool: &EmployeePgPool, fio: &str) -> EmployeeId {
    let id = EmployeeId::new();
    let mut connection = pool.get().expect("pooled connection");
    sql_query("INSERT INTO employees (id, fio) VALUES ($1, $2)")
        .bind::<diesel::sql_types::Uuid, _>(id.into_inner())
        .bind::<diesel::sql_types::Text, _>(fio)
        .execute(&mut connection)
        .expect("employee insert should succeed");
    id
}

#[tokio::test(flavor = "multi_thread")]
async fn distribution_flow_against_postgres() {
    let Some(pool) = test_pool() else {
        return;
    };

    {
        let mut connection = pool.get().expect("pooled connection");
        connection
            .batch_execute(SCHEMA_SQL)
            .expect("schema setup should succeed");
    }

    let belov = seed_employee(&pool, "Belov Artem");
    let volkova = seed_employee(&pool, "Volkova Elena");
    let karpov = seed_employee(&pool, "Karpov Denis");

    let repository = PostgresEmployeeRepository::new(pool);
    let service = TaskDistributionService::new(Arc::new(repository), Arc::new(DefaultClock));

    // Listing: all employees come back; sorted listings mirror each other.
    let unsorted = service
        .list_employees(None)
        .await
        .expect("listing should succeed");
    assert_eq!(unsorted.len(), 3);

    let ascending = service
        .list_employees(Some(SortDirection::Asc))
        .await
        .expect("ascending listing should succeed");
    let asc_names: Vec<&str> = ascending.iter().map(|dto| dto.fio.as_str()).collect();
    assert_eq!(asc_names, ["Belov Artem", "Karpov Denis", "Volkova Elena"]);

    let descending = service
        .list_employees(Some(SortDirection::Desc))
        .await
        .expect("descending listing should succeed");
    let mut mirrored = descending;
    mirrored.reverse();
    assert_eq!(ascending, mirrored);

    // Assignment: the new task appears with its data and default status.
    let first = service
        .assign_task(belov, NewTaskRequest::new("set up staging cluster"))
        .await
        .expect("assignment should succeed");
    let second = service
        .assign_task(belov, NewTaskRequest::new("rotate API keys"))
        .await
        .expect("assignment should succeed");

    let tasks = service
        .tasks_for_employee(belov)
        .await
        .expect("task listing should succeed");
    assert_eq!(tasks, vec![first.clone(), second.clone()]);
    assert_eq!(first.status, TaskStatus::New);

    // Status change: only the targeted task is affected.
    service
        .change_task_status(belov, first.id, TaskStatus::Done)
        .await
        .expect("status change should succeed");

    let tasks_after = service
        .tasks_for_employee(belov)
        .await
        .expect("task listing should succeed");
    let statuses: Vec<(TaskId, TaskStatus)> = tasks_after
        .iter()
        .map(|task| (task.id, task.status))
        .collect();
    assert_eq!(
        statuses,
        vec![(first.id, TaskStatus::Done), (second.id, TaskStatus::New)]
    );

    // Cross-employee mutation is rejected and leaves the task untouched.
    let cross = service
        .change_task_status(volkova, second.id, TaskStatus::Done)
        .await;
    assert!(matches!(
        cross,
        Err(TaskDistributionError::Repository(
            EmployeeRepositoryError::TaskNotFound(_)
        ))
    ));

    // Unknown employees are reported on lookups and mutations alike.
    let unknown = EmployeeId::new();
    let fetch = service.get_employee(unknown).await.map(|_| ());
    let assign = service
        .assign_task(unknown, NewTaskRequest::new("ghost work"))
        .await
        .map(|_| ());
    for result in [fetch, assign] {
        assert!(matches!(
            result,
            Err(TaskDistributionError::Repository(
                EmployeeRepositoryError::EmployeeNotFound(_)
            ))
        ));
    }

    // Karpov never received work.
    let idle = service
        .tasks_for_employee(karpov)
        .await
        .expect("task listing should succeed");
    assert!(idle.is_empty());
}
