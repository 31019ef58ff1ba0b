//! `PostgreSQL` adapters for employee and task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{EmployeePgPool, PostgresEmployeeRepository};
