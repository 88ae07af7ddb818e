//! `srp` crate — the Single Responsibility Principle demonstration.
//!
//! A class, method, or function should have one and only one reason to
//! change. The payroll example contrasts a method that fetches *and*
//! computes with a pure computation step fed by a separate lookup, and the
//! do-everything service in [`violation`] with the focused services in
//! [`refactored`].

pub mod models;
pub mod repository;
pub mod service;
pub mod violation;
pub mod refactored;
mod demo;

pub use models::Employee;
pub use repository::EmployeeRepository;
pub use service::PayrollService;
pub use demo::demo;
