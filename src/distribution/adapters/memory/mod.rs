//! In-memory adapter implementations.

mod employee;

pub use employee::InMemoryEmployeeRepository;
