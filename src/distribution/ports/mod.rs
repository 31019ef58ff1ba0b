//! Port contracts for task distribution.
//!
//! Ports define infrastructure-agnostic interfaces used by distribution
//! services.

pub mod repository;

pub use repository::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult};
