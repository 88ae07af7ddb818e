//! `isp` crate — the Interface Segregation Principle demonstration.
//!
//! Interfaces should be narrow enough that no type is forced to implement
//! a method it does not need. Each behaviour here is its own single-method
//! capability trait, and each bird variant implements exactly the subset
//! that applies to it.

pub mod capabilities;
pub mod birds;
mod demo;

pub use capabilities::{Fly, Swim, Walk};
pub use birds::{Ostrich, Penguin, Sparrow};
pub use demo::demo;
