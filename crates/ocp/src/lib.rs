//! `ocp` crate — the Open/Closed Principle demonstration.
//!
//! Entities should be open for extension but closed for modification.
//! The [`violation`] module computes pay by inspecting the runtime type of
//! its input, so every new employment type means editing the routine. The
//! [`refactored`] module replaces the branching with a single-method
//! [`Compensation`] capability implemented once per employment type.

pub mod violation;
pub mod refactored;
mod demo;

pub use refactored::{Compensation, HourlyContract, Payroll, SalariedContract, TraineeStipend};
pub use demo::demo;
