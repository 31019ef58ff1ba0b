//! Taskdist: task distribution backend for employees.
//!
//! This crate provides the core functionality for distributing work among
//! employees: listing employees and their assigned tasks, changing a task's
//! status, and assigning new tasks.
//!
//! # Architecture
//!
//! Taskdist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`distribution`]: Employee roster, task assignment, and task status
//!   lifecycle

pub mod distribution;
