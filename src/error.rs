use std::fmt;

use crate::Float;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Two bodies share a position, so the force between them is undefined.
    CoincidentBodies { body: String, other: String },
    NonPositiveMass { body: String, mass: Float },
    /// The summed force on a body overflowed or became NaN.
    NonFiniteForce { body: String },
    Config(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::CoincidentBodies { body, other } => {
                write!(f, "bodies `{}` and `{}` are at the same position", body, other)
            }
            SimError::NonPositiveMass { body, mass } => {
                write!(f, "body `{}` has non-positive mass {}", body, mass)
            }
            SimError::NonFiniteForce { body } => {
                write!(f, "net force on body `{}` is not finite", body)
            }
            SimError::Config(msg) => write!(f, "invalid scenario: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}
