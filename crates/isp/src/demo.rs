//! Fixed demonstration sequence for the interface segregation example.

use tracing::debug;

use crate::birds::{Ostrich, Penguin, Sparrow};
use crate::capabilities::{Fly, Swim, Walk};

/// Run the demonstration and return its transcript.
pub fn demo() -> Vec<String> {
    let mut lines = Vec::new();

    let sparrow = Sparrow;
    debug!("sparrow capabilities: fly, walk");
    lines.push(sparrow.fly());
    lines.push(sparrow.walk());

    let penguin = Penguin;
    debug!("penguin capabilities: swim, walk");
    lines.push(penguin.swim());
    lines.push(penguin.walk());

    let ostrich = Ostrich;
    debug!("ostrich capabilities: walk");
    lines.push(ostrich.walk());

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
                "O pardal está voando",
                "O pardal está andando",
                "O pinguim está nadando",
                "O pinguim está andando",
                "O avestruz está andando",
            ],
        );
    }
}
