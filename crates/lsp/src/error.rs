//! The one modeled failure in the catalogue.

use thiserror::Error;

/// Signalled by the broken hierarchy when a subtype cannot honour the base
/// flight contract. The corrected hierarchy has no use for this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlightError {
    /// The operation is not supported by this subtype.
    #[error("{0}")]
    Unsupported(String),
}
