use std::fmt;
use thiserror::Error;

/// Identifies one of the two arm links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// Link attached to the base (length L1).
    First,
    /// Link carrying the end effector (length L2).
    Second,
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Link::First => f.write_str("L1"),
            Link::Second => f.write_str("L2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KinematicsError {
    #[error("link length {link} must be positive and finite, got {length}")]
    InvalidGeometry { link: Link, length: f64 },

    #[error("steps per rotation for joint {joint} must be positive and finite, got {steps}")]
    InvalidStepsPerRotation { joint: usize, steps: f64 },

    #[error("origin theta2 offset must be finite, got {offset}")]
    InvalidOriginOffset { offset: f64 },

    #[error("maximum radius must be positive and finite, got {radius}")]
    InvalidMaxRadius { radius: f64 },
}
