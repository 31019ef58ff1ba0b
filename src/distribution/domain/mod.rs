//! Domain model for task distribution.
//!
//! The distribution domain models employees as aggregate roots owning their
//! assigned tasks, with validated scalar types for names and identifiers,
//! while keeping all infrastructure concerns outside of the domain boundary.

mod employee;
mod error;
mod fio;
mod ids;
mod sort;
mod status;
mod task;

pub use employee::{Employee, PersistedEmployeeData};
pub use error::{DistributionDomainError, ParseSortDirectionError, ParseTaskStatusError};
pub use fio::FullName;
pub use ids::{EmployeeId, TaskId};
pub use sort::SortDirection;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
