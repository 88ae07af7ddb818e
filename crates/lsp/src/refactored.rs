//! The corrected hierarchy: flight is mandatory to implement and cannot
//! fail.
//!
//! There is no default body to silently inherit and break, and the return
//! type admits no error, so any conforming type is substitutable wherever
//! a [`Bird`] is expected.

/// Every subtype supplies its own behaviourally valid answer to `fly`.
pub trait Bird {
    fn fly(&self) -> String;
}

/// A bird that actually flies.
#[derive(Debug, Default)]
pub struct Sparrow;

impl Bird for Sparrow {
    fn fly(&self) -> String {
        "O pardal está voando".to_string()
    }
}

/// A bird that does not fly — and says so, instead of failing.
#[derive(Debug, Default)]
pub struct Ostrich;

impl Bird for Ostrich {
    fn fly(&self) -> String {
        "O avestruz não pode voar".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subtype_is_substitutable() {
        // The caller treats all subtypes uniformly — no special cases, no
        // error handling, because none is possible.
        let birds: Vec<Box<dyn Bird>> = vec![Box::new(Sparrow), Box::new(Ostrich)];
        let messages: Vec<String> = birds.iter().map(|bird| bird.fly()).collect();
        assert_eq!(messages, vec!["O pardal está voando", "O avestruz não pode voar"]);
    }
}
