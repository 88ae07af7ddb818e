//! In-memory stand-in for the employee database.
//!
//! Lookups always succeed with fixed values — real persistence is out of
//! scope for the catalogue.

use tracing::debug;

use crate::models::Employee;

/// Data-access stand-in. Its single responsibility is handing records to
/// the service layer; it never computes pay.
#[derive(Debug, Default)]
pub struct EmployeeRepository;

impl EmployeeRepository {
    /// Resolve an employee by registry number.
    pub fn find_employee(&self, registry_number: u64) -> Employee {
        debug!("looking up employee {registry_number}");
        Employee::new("Fulano", registry_number, 8.0)
    }

    /// Resolve the total discounts applied to an employee's pay.
    pub fn discounts_for(&self, registry_number: u64) -> f64 {
        debug!("looking up discounts for employee {registry_number}");
        50.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_always_succeeds_with_fixed_values() {
        let repository = EmployeeRepository;

        let employee = repository.find_employee(7);
        assert_eq!(employee.name, "Fulano");
        assert_eq!(employee.registry_number, 7);
        assert_eq!(employee.value_hour, 8.0);

        assert_eq!(repository.discounts_for(7), 50.0);
    }
}
