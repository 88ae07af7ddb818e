//! One trait per behaviour, so a variant opts into exactly what it can do.

/// Flight, for the birds that actually fly.
pub trait Fly {
    fn fly(&self) -> String;
}

/// Swimming, for the birds that actually swim.
pub trait Swim {
    fn swim(&self) -> String;
}

/// Walking, for the birds that actually walk.
pub trait Walk {
    fn walk(&self) -> String;
}

/// Only callable with a variant that both flies and walks. These bounded
/// helpers are the compile-time witness that each variant's capability set
/// is exactly the subset it declares.
pub fn flying_walker<T: Fly + Walk>(bird: &T) -> Vec<String> {
    vec![bird.fly(), bird.walk()]
}

/// Only callable with a variant that both swims and walks.
pub fn swimming_walker<T: Swim + Walk>(bird: &T) -> Vec<String> {
    vec![bird.swim(), bird.walk()]
}

/// Only callable with a variant that walks.
pub fn walker<T: Walk>(bird: &T) -> Vec<String> {
    vec![bird.walk()]
}
