//! Evenly spaced sample times for a simulation run
//!
//! `TimeGrid` covers `[0, max_time]` with `steps` intervals, so it yields
//! `steps + 1` samples: `sample[i] = i * max_time / steps`

use crate::simulation::error::InvalidArgument;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    max_time: f64, // last sample, s
    steps: usize, // number of intervals
}

impl TimeGrid {
    /// Build a grid, rejecting a non-positive (or non-finite) `max_time`
    /// and a zero step count
    pub fn new(max_time: f64, steps: usize) -> Result<Self, InvalidArgument> {
        if !(max_time.is_finite() && max_time > 0.0) {
            return Err(InvalidArgument::NonPositiveMaxTime { max_time });
        }
        if steps == 0 {
            return Err(InvalidArgument::NonPositiveSteps);
        }
        // samples are counted as steps + 1
        if steps.checked_add(1).is_none() {
            return Err(InvalidArgument::TooManySteps { steps });
        }
        Ok(Self { max_time, steps })
    }

    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of samples, always `steps + 1`
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    /// A valid grid always holds at least `0.0` and `max_time`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Distance between two neighbouring samples
    pub fn spacing(&self) -> f64 {
        self.max_time / self.steps as f64
    }

    /// Sample `i`, computed as `i * max_time / steps`.
    /// The last sample is `max_time` itself, whatever the rounding of the product
    pub fn sample(&self, i: usize) -> f64 {
        if i == self.steps {
            return self.max_time;
        }
        i as f64 * self.max_time / self.steps as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.steps).map(move |i| self.sample(i))
    }

    pub fn samples(&self) -> Vec<f64> {
        self.iter().collect()
    }
}
