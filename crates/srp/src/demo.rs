//! Fixed demonstration sequence for the single-responsibility example.

use crate::refactored::{FileService, MailService, MessagePublisher};
use crate::repository::EmployeeRepository;
use crate::service::PayrollService;

/// Run the demonstration and return its transcript.
pub fn demo() -> Vec<String> {
    let mut lines = Vec::new();

    let service = PayrollService::new(EmployeeRepository);
    lines.push(format!(
        "Cálculo errado (busca e aritmética no mesmo método): {}",
        service.calculate_income_wrong(42, 160),
    ));
    lines.push(format!(
        "Cálculo correto (aritmética isolada em net_income): {}",
        service.calculate_income(42, 160),
    ));

    // The god service's side responsibilities, each moved to its own type.
    let employee = EmployeeRepository.find_employee(42);
    lines.push(MailService.send_mail(&employee));
    lines.push(FileService.print_file("folha-de-pagamento.pdf"));
    lines.push(MessagePublisher.publish("pagamento-processado"));

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
                "Cálculo errado (busca e aritmética no mesmo método): 1230",
                "Cálculo correto (aritmética isolada em net_income): 1230",
                "Enviando e-mail para Fulano",
                "Imprimindo o arquivo folha-de-pagamento.pdf",
                "Publicando mensagem na fila: pagamento-processado",
            ],
        );
    }
}
