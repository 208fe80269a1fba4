//! The one error kind of the kinematic core.
//!
//! Every failure the core can report is a rejected argument: a bad physical
//! parameter, a bad time, a bad grid or a bad number typed at the console.
//! `main` catches this type and prints it as a single line.

use std::io::Write;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    /// Zero acceleration degenerates to uniform motion (strict policy only)
    #[error("acceleration cannot be zero in uniformly accelerated motion")]
    ZeroAcceleration,

    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Evaluation before t = 0 (strict policy only)
    #[error("time cannot be negative, got {t}")]
    NegativeTime { t: f64 },

    #[error("maximum time must be positive, got {max_time}")]
    NonPositiveMaxTime { max_time: f64 },

    #[error("step count must be positive")]
    NonPositiveSteps,

    #[error("step count {steps} is too large")]
    TooManySteps { steps: usize },

    #[error("simulation needs at least one body")]
    NoBodies,

    #[error("could not read a number from {input:?}")]
    MalformedNumber { input: String },

    /// Scenario file that does not match the expected layout or types
    #[error("malformed scenario: {reason}")]
    MalformedScenario { reason: String },
}

/// Report a rejected argument as a single `Error: <message>` line and
/// swallow it; any other error is passed through untouched
pub fn report_invalid_argument<W: Write>(outcome: anyhow::Result<()>, out: &mut W) -> anyhow::Result<()> {
    match outcome {
        Err(e) => match e.downcast_ref::<InvalidArgument>() {
            Some(invalid) => {
                writeln!(out, "Error: {invalid}")?;
                Ok(())
            }
            None => Err(e),
        },
        ok => ok,
    }
}
