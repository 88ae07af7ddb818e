//! The responsibilities of [`crate::violation::EmployeeGodService`], split
//! into focused print-only stand-ins — one concern per type.

use tracing::info;

use crate::models::Employee;

/// File printing, and nothing else.
#[derive(Debug, Default)]
pub struct FileService;

impl FileService {
    pub fn print_file(&self, file_name: &str) -> String {
        let line = format!("Imprimindo o arquivo {file_name}");
        info!("{line}");
        line
    }
}

/// Mail delivery, and nothing else.
#[derive(Debug, Default)]
pub struct MailService;

impl MailService {
    pub fn send_mail(&self, employee: &Employee) -> String {
        let line = format!("Enviando e-mail para {}", employee.name);
        info!("{line}");
        line
    }
}

/// Queue publishing, and nothing else.
#[derive(Debug, Default)]
pub struct MessagePublisher;

impl MessagePublisher {
    pub fn publish(&self, message: &str) -> String {
        let line = format!("Publicando mensagem na fila: {message}");
        info!("{line}");
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_service_reports_its_single_action() {
        let employee = Employee::new("Fulano", 1, 8.0);

        assert_eq!(
            FileService.print_file("folha-de-pagamento.pdf"),
            "Imprimindo o arquivo folha-de-pagamento.pdf",
        );
        assert_eq!(
            MailService.send_mail(&employee),
            "Enviando e-mail para Fulano",
        );
        assert_eq!(
            MessagePublisher.publish("pagamento-processado"),
            "Publicando mensagem na fila: pagamento-processado",
        );
    }
}
