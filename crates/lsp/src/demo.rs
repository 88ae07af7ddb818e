//! Fixed demonstration sequence for the Liskov substitution example.

use tracing::warn;

use crate::refactored;
use crate::violation;

/// Run the demonstration and return its transcript.
pub fn demo() -> Vec<String> {
    let mut lines = Vec::new();

    // Broken hierarchy: the base type flies, its substitute fails.
    let pigeon: &dyn violation::Bird = &violation::Pigeon;
    match pigeon.fly() {
        Ok(message) => lines.push(message),
        Err(err) => lines.push(format!("Erro: {err}")),
    }

    let ostrich: &dyn violation::Bird = &violation::Ostrich;
    match ostrich.fly() {
        Ok(message) => lines.push(message),
        Err(err) => {
            warn!("substitution broke the flight contract: {err}");
            lines.push(format!("Erro: {err}"));
        }
    }

    // Corrected hierarchy: every substitute answers without failing.
    let birds: Vec<Box<dyn refactored::Bird>> =
        vec![Box::new(refactored::Sparrow), Box::new(refactored::Ostrich)];
    for bird in &birds {
        lines.push(bird.fly());
    }

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
                "O pássaro está voando",
                "Erro: O avestruz não pode voar!",
                "O pardal está voando",
                "O avestruz não pode voar",
            ],
        );
    }

    #[test]
    fn only_the_broken_half_ever_errors() {
        // Lines 3 and 4 come from the corrected hierarchy; by construction
        // they can never carry an error prefix.
        let lines = demo();
        assert!(lines[1].starts_with("Erro: "));
        assert!(lines[2..].iter().all(|line| !line.starts_with("Erro: ")));
    }
}
