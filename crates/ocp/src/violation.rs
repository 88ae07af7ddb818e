//! Compensation by runtime type inspection — the open/closed violation.

use std::any::Any;

/// Salaried employment contract.
#[derive(Debug, Clone)]
pub struct ContractClt {
    pub salary: f64,
}

/// Trainee on a fixed stipend.
#[derive(Debug, Clone)]
pub struct Trainee {
    pub stipend: f64,
}

/// Picks the calculation by downcasting to each known concrete type in
/// turn. Supporting a new employment type requires adding another branch
/// here, which is exactly what "closed for modification" forbids.
pub fn gross_pay(worker: &dyn Any) -> f64 {
    if let Some(clt) = worker.downcast_ref::<ContractClt>() {
        clt.salary
    } else if let Some(trainee) = worker.downcast_ref::<Trainee>() {
        trainee.stipend
    } else {
        // Unknown types silently fall through — the second problem with
        // this shape.
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_are_matched_by_downcast() {
        assert_eq!(gross_pay(&ContractClt { salary: 5000.0 }), 5000.0);
        assert_eq!(gross_pay(&Trainee { stipend: 1500.0 }), 1500.0);
    }

    #[test]
    fn unknown_types_fall_through_to_zero() {
        // A type the routine was never taught about gets no pay at all.
        struct Contractor;
        assert_eq!(gross_pay(&Contractor), 0.0);
    }
}
