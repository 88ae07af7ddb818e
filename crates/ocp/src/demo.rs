//! Fixed demonstration sequence for the open/closed example.

use tracing::debug;

use crate::refactored::{HourlyContract, Payroll, SalariedContract, TraineeStipend};
use crate::violation::{self, ContractClt};

/// Run the demonstration and return its transcript.
pub fn demo() -> Vec<String> {
    let mut lines = Vec::new();

    // The broken shape, shown once: pay resolved by runtime type checks.
    let inspected = violation::gross_pay(&ContractClt { salary: 5000.0 });
    debug!("type-inspecting routine resolved {inspected}");
    lines.push(format!("Cálculo por inspeção de tipo (violação): {inspected}"));

    // The corrected shape: one capability, one implementation per type.
    let payroll = Payroll;
    lines.push(format!(
        "CLT: {}",
        payroll.calculate(&SalariedContract { salary: 5000.0 }),
    ));
    lines.push(format!(
        "Trainee: {}",
        payroll.calculate(&TraineeStipend { stipend: 1500.0 }),
    ));
    lines.push(format!(
        "PJ: {}",
        payroll.calculate(&HourlyContract { rate: 100.0, hours: 160 }),
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_is_deterministic() {
        assert_eq!(
            demo(),
            vec![
                "Cálculo por inspeção de tipo (violação): 5000",
                "CLT: 5000",
                "Trainee: 1500",
                "PJ: 16000",
            ],
        );
    }
}
