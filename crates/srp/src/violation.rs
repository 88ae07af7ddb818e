//! The "one struct does everything" violation.
//!
//! Persistence, payroll arithmetic, mail, file printing, and queue
//! publishing all live on one type, so every one of those concerns is a
//! reason for it to change.

use tracing::info;

use crate::models::Employee;

/// Accumulates five unrelated responsibilities. The refactored split lives
/// in [`crate::refactored`].
#[derive(Debug, Default)]
pub struct EmployeeGodService;

impl EmployeeGodService {
    pub fn save_employee(&self, employee: &Employee) -> String {
        let line = format!("Salvando o funcionário {}", employee.name);
        info!("{line}");
        line
    }

    pub fn calculate_salary(&self, value_hour: f64, total_hours: u32) -> f64 {
        value_hour * f64::from(total_hours)
    }

    pub fn calculate_discount(&self, gross: f64) -> f64 {
        gross * 0.1
    }

    pub fn send_mail(&self, employee: &Employee) -> String {
        let line = format!("Enviando e-mail para {}", employee.name);
        info!("{line}");
        line
    }

    pub fn print_file(&self, file_name: &str) -> String {
        let line = format!("Imprimindo o arquivo {file_name}");
        info!("{line}");
        line
    }

    pub fn publish_message(&self, message: &str) -> String {
        let line = format!("Publicando mensagem na fila: {message}");
        info!("{line}");
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn god_service_really_does_everything() {
        let service = EmployeeGodService;
        let employee = Employee::new("Fulano", 1, 8.0);

        // Five unrelated concerns on one type — the point of the violation.
        assert!(service.save_employee(&employee).contains("Fulano"));
        assert_eq!(service.calculate_salary(8.0, 160), 1280.0);
        assert_eq!(service.calculate_discount(1280.0), 128.0);
        assert!(service.send_mail(&employee).contains("e-mail"));
        assert!(service.print_file("folha.pdf").contains("folha.pdf"));
        assert!(service.publish_message("pagamento").contains("pagamento"));
    }
}
