//! Payroll service — the before/after pair for the calculation itself.
//!
//! `calculate_income_wrong` mixes data access and arithmetic in one
//! method. `net_income` is the isolated computation step; `calculate_income`
//! fetches the data and delegates to it.

use crate::repository::EmployeeRepository;

/// Service layer for pay calculations, constructed with an injected
/// lookup collaborator.
pub struct PayrollService {
    repository: EmployeeRepository,
}

impl PayrollService {
    pub fn new(repository: EmployeeRepository) -> Self {
        Self { repository }
    }

    /// The violation: one method with three reasons to change.
    ///
    /// 1. It fetches the employee (the repository's job).
    /// 2. It fetches the discounts (also the repository's job).
    /// 3. It performs the final arithmetic (the calculation's job).
    pub fn calculate_income_wrong(&self, registry_number: u64, total_hours: u32) -> f64 {
        let employee = self.repository.find_employee(registry_number);
        let discounts = self.repository.discounts_for(employee.registry_number);
        employee.value_hour * f64::from(total_hours) - discounts
    }

    /// The single-responsibility unit: pure arithmetic over its parameters,
    /// independent of any lookup outcome.
    pub fn net_income(value_hour: f64, total_hours: u32, discounts: f64) -> f64 {
        value_hour * f64::from(total_hours) - discounts
    }

    /// Fetches the data, then delegates the arithmetic to
    /// [`PayrollService::net_income`]. The focus here is orchestration only.
    pub fn calculate_income(&self, registry_number: u64, total_hours: u32) -> f64 {
        let employee = self.repository.find_employee(registry_number);
        let discounts = self.repository.discounts_for(registry_number);
        Self::net_income(employee.value_hour, total_hours, discounts)
    }
}
