//! Task distribution among employees.
//!
//! This module implements the employee/task service: listing employees with
//! their assigned tasks (optionally sorted by full name), fetching a single
//! employee, fetching an employee's tasks, changing a task's status, and
//! assigning a new task to an employee. Task lookup during a status change
//! is always scoped to the owning employee's tasks so one employee's task
//! can never be mutated through another employee's identifier. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
