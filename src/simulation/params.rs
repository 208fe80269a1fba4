//! Physical parameters of one body in uniformly accelerated motion
//!
//! `KinematicParameters` holds the initial state and the constant
//! acceleration. Fields are private so a value that passed validation
//! can't be changed afterwards

use crate::configuration::config::ValidationPolicy;
use crate::simulation::error::InvalidArgument;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicParameters {
    initial_position: f64, // x0, m
    initial_velocity: f64, // v0, m/s
    acceleration: f64, // a, m/s^2
}

impl KinematicParameters {
    /// Validate and build the parameters of one body.
    ///
    /// Non-finite components are always rejected. Zero acceleration is only
    /// rejected under [`ValidationPolicy::Strict`].
    pub fn new(initial_position: f64, initial_velocity: f64, acceleration: f64, policy: ValidationPolicy) -> Result<Self, InvalidArgument> {
        check_finite("initial position", initial_position)?;
        check_finite("initial velocity", initial_velocity)?;
        check_finite("acceleration", acceleration)?;

        if policy == ValidationPolicy::Strict && acceleration == 0.0 {
            return Err(InvalidArgument::ZeroAcceleration);
        }

        Ok(Self {
            initial_position,
            initial_velocity,
            acceleration,
        })
    }

    pub fn initial_position(&self) -> f64 {
        self.initial_position
    }

    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), InvalidArgument> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidArgument::NonFinite { name, value })
    }
}
