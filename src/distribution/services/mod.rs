//! Orchestration services for task distribution.

mod distribution;
mod dto;

pub use distribution::{
    NewTaskRequest, TaskDistributionError, TaskDistributionResult, TaskDistributionService,
};
pub use dto::{EmployeeDto, TaskDto};
