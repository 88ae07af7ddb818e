//! Bird variants, each implementing only its applicable capabilities.

use crate::capabilities::{Fly, Swim, Walk};

/// Flies and walks. Does not implement [`Swim`].
#[derive(Debug, Default)]
pub struct Sparrow;

impl Fly for Sparrow {
    fn fly(&self) -> String {
        "O pardal está voando".to_string()
    }
}

impl Walk for Sparrow {
    fn walk(&self) -> String {
        "O pardal está andando".to_string()
    }
}

/// Swims and walks. A penguin is never asked to provide `fly`, because
/// [`Fly`] is a separate contract it simply does not declare.
#[derive(Debug, Default)]
pub struct Penguin;

impl Swim for Penguin {
    fn swim(&self) -> String {
        "O pinguim está nadando".to_string()
    }
}

impl Walk for Penguin {
    fn walk(&self) -> String {
        "O pinguim está andando".to_string()
    }
}

/// Walks only.
#[derive(Debug, Default)]
pub struct Ostrich;

impl Walk for Ostrich {
    fn walk(&self) -> String {
        "O avestruz está andando".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{flying_walker, swimming_walker, walker};

    #[test]
    fn sparrow_flies_and_walks() {
        assert_eq!(
            flying_walker(&Sparrow),
            vec!["O pardal está voando", "O pardal está andando"],
        );
    }

    #[test]
    fn penguin_swims_and_walks() {
        assert_eq!(
            swimming_walker(&Penguin),
            vec!["O pinguim está nadando", "O pinguim está andando"],
        );
    }

    #[test]
    fn ostrich_only_walks() {
        assert_eq!(walker(&Ostrich), vec!["O avestruz está andando"]);
    }

    #[test]
    fn capability_sets_are_exact_subsets() {
        // `walker` accepts every variant; the narrower helpers accept only
        // the variants that declare the extra capability. The calls below
        // compile precisely because each variant implements its subset and
        // nothing more — e.g. `flying_walker(&Penguin)` would not compile.
        walker(&Sparrow);
        walker(&Penguin);
        walker(&Ostrich);
        flying_walker(&Sparrow);
        swimming_walker(&Penguin);
    }
}
