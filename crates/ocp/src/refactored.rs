//! Compensation behind a single-method capability — open for extension,
//! closed for modification.

use serde::{Deserialize, Serialize};

/// The one capability every employment type provides.
///
/// New employment types implement this trait; nothing else in the crate
/// changes.
pub trait Compensation {
    /// Periodic compensation figure for this employment type.
    fn amount(&self) -> f64;
}

/// Salaried contract: compensation is the fixed salary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalariedContract {
    pub salary: f64,
}

impl Compensation for SalariedContract {
    fn amount(&self) -> f64 {
        self.salary
    }
}

/// Trainee: compensation is the fixed stipend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraineeStipend {
    pub stipend: f64,
}

impl Compensation for TraineeStipend {
    fn amount(&self) -> f64 {
        self.stipend
    }
}

/// Contractor paid by the hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyContract {
    pub rate: f64,
    pub hours: u32,
}

impl Compensation for HourlyContract {
    fn amount(&self) -> f64 {
        self.rate * f64::from(self.hours)
    }
}

/// The invoking routine. It depends only on [`Compensation`] and performs
/// no type inspection, so it never needs to change for a new variant.
#[derive(Debug, Default)]
pub struct Payroll;

impl Payroll {
    pub fn calculate(&self, worker: &dyn Compensation) -> f64 {
        worker.amount()
    }
}
