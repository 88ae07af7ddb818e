//! `lsp` crate — the Liskov Substitution Principle demonstration.
//!
//! Objects of a derived type must be substitutable for the base type
//! without altering program correctness. The [`violation`] hierarchy lets
//! a non-flying bird override the flight contract with a failure; the
//! [`refactored`] hierarchy makes flight mandatory to implement and
//! impossible to fail, so every subtype stays substitutable.

pub mod error;
pub mod violation;
pub mod refactored;
mod demo;

pub use error::FlightError;
pub use demo::demo;
