//! The broken hierarchy: a subtype that signals failure where the base
//! contract promises success.

use crate::error::FlightError;

/// Base contract: every bird flies. The default body is the base
/// behaviour, and the `Result` return type already betrays the problem —
/// callers must be prepared for a "bird" that cannot fly.
pub trait Bird {
    fn fly(&self) -> Result<String, FlightError> {
        Ok("O pássaro está voando".to_string())
    }
}

/// Behaves exactly like the base type.
#[derive(Debug, Default)]
pub struct Pigeon;

impl Bird for Pigeon {}

/// Cannot fly, yet conforms to a contract that says it must. Substituting
/// it where a [`Bird`] is expected breaks the caller.
#[derive(Debug, Default)]
pub struct Ostrich;

impl Bird for Ostrich {
    fn fly(&self) -> Result<String, FlightError> {
        Err(FlightError::Unsupported("O avestruz não pode voar!".to_string()))
    }
}
