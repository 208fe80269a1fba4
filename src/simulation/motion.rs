//! Motion models evaluated in closed form
//!
//! [`Movement`] is the capability every motion kind provides: position,
//! velocity and acceleration at a time `t`. The runner only sees trait
//! objects, so a new motion kind needs no change there.
//! [`UniformlyAccelerated`] is the constant-acceleration model (MRUA).

use crate::configuration::config::ValidationPolicy;
use crate::simulation::error::InvalidArgument;
use crate::simulation::params::KinematicParameters;

/// Trait for motion models evaluated at a single time `t`
/// Implementations are pure: same `t`, same answer
pub trait Movement {
    fn position(&self, t: f64) -> Result<f64, InvalidArgument>;
    fn velocity(&self, t: f64) -> Result<f64, InvalidArgument>;
    fn acceleration(&self, t: f64) -> Result<f64, InvalidArgument>;
}

/// Constant-acceleration rectilinear motion
///
/// - x(t) = x0 + v0 t + 1/2 a t^2
/// - v(t) = v0 + a t
/// - a(t) = a
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformlyAccelerated {
    params: KinematicParameters,
    policy: ValidationPolicy, // strict rejects t < 0
}

impl UniformlyAccelerated {
    pub fn new(params: KinematicParameters, policy: ValidationPolicy) -> Self {
        Self { params, policy }
    }

    /// Validate the raw values and build the model in one go
    pub fn from_values(x0: f64, v0: f64, a: f64, policy: ValidationPolicy) -> Result<Self, InvalidArgument> {
        let params = KinematicParameters::new(x0, v0, a, policy)?;
        Ok(Self::new(params, policy))
    }

    pub fn params(&self) -> &KinematicParameters {
        &self.params
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn check_time(&self, t: f64) -> Result<(), InvalidArgument> {
        if self.policy == ValidationPolicy::Strict && t < 0.0 {
            return Err(InvalidArgument::NegativeTime { t });
        }
        Ok(())
    }
}

impl Movement for UniformlyAccelerated {
    fn position(&self, t: f64) -> Result<f64, InvalidArgument> {
        self.check_time(t)?;
        let p = &self.params;
        Ok(p.initial_position() + p.initial_velocity() * t + 0.5 * p.acceleration() * (t * t))
    }

    fn velocity(&self, t: f64) -> Result<f64, InvalidArgument> {
        self.check_time(t)?;
        let p = &self.params;
        Ok(p.initial_velocity() + p.acceleration() * t)
    }

    fn acceleration(&self, t: f64) -> Result<f64, InvalidArgument> {
        self.check_time(t)?;
        Ok(self.params.acceleration())
    }
}
