//! Batch evaluation of one or more bodies over a `TimeGrid`
//!
//! `SimulationRunner` collects boxed [`Movement`] terms (one per body) and
//! evaluates each of them at every grid sample, in ascending time order.
//! The result holds one [`Trajectory`] per body, aligned by index with the
//! grid samples. Nothing is kept between runs.

use crate::simulation::error::InvalidArgument;
use crate::simulation::grid::TimeGrid;
use crate::simulation::motion::Movement;

/// One registered body: a label for charts/tables and its motion model
struct TrackedBody {
    label: String,
    motion: Box<dyn Movement + Send + Sync>,
}

/// Evaluates every registered body over a shared time grid
pub struct SimulationRunner {
    grid: TimeGrid,
    bodies: Vec<TrackedBody>,
}

impl SimulationRunner {
    /// Create a runner with no bodies yet
    pub fn new(grid: TimeGrid) -> Self {
        Self {
            grid,
            bodies: Vec::new(),
        }
    }

    /// Add a body
    pub fn with<M>(mut self, label: impl Into<String>, motion: M) -> Self
    where
        M: Movement + Send + Sync + 'static,
    {
        self.bodies.push(TrackedBody {
            label: label.into(),
            motion: Box::new(motion),
        });
        self
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.bodies.iter().map(|b| b.label.as_str())
    }

    /// Evaluate position, velocity and acceleration of every body at every
    /// grid sample.
    ///
    /// Fails fast: the first rejected evaluation aborts the run and no partial
    /// result is returned.
    pub fn run(&self) -> Result<SimulationResult, InvalidArgument> {
        if self.bodies.is_empty() {
            return Err(InvalidArgument::NoBodies);
        }

        let times = self.grid.samples();
        let n = times.len();

        let mut trajectories = Vec::with_capacity(self.bodies.len());
        for body in &self.bodies {
            let mut traj = Trajectory::with_capacity(body.label.clone(), n);
            for &t in &times {
                traj.positions.push(body.motion.position(t)?);
                traj.velocities.push(body.motion.velocity(t)?);
                traj.accelerations.push(body.motion.acceleration(t)?);
            }
            trajectories.push(traj);
        }

        log::debug!("evaluated {} bodies over {} samples", trajectories.len(), n);

        Ok(SimulationResult { times, trajectories })
    }
}

/// Position, velocity and acceleration of one body across the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub label: String,
    pub positions: Vec<f64>, // m
    pub velocities: Vec<f64>, // m/s
    pub accelerations: Vec<f64>, // m/s^2
}

impl Trajectory {
    fn with_capacity(label: String, n: usize) -> Self {
        Self {
            label,
            positions: Vec::with_capacity(n),
            velocities: Vec::with_capacity(n),
            accelerations: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// State of one body at one grid sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub t: f64,
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

/// Output of one [`SimulationRunner::run`]
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub times: Vec<f64>, // shared grid samples
    pub trajectories: Vec<Trajectory>, // one per body, same order as registration
}

impl SimulationResult {
    /// Samples of body `body` in ascending time order.
    /// Yields nothing when `body` is not a registered body index
    pub fn samples(&self, body: usize) -> impl Iterator<Item = TrajectorySample> + '_ {
        let times = &self.times;
        self.trajectories.get(body).into_iter().flat_map(move |traj| {
            times
                .iter()
                .zip(&traj.positions)
                .zip(&traj.velocities)
                .zip(&traj.accelerations)
                .map(|(((&t, &position), &velocity), &acceleration)| TrajectorySample {
                    t,
                    position,
                    velocity,
                    acceleration,
                })
        })
    }

    /// Last sample of body `body`, i.e. its state at `max_time`
    pub fn final_sample(&self, body: usize) -> Option<TrajectorySample> {
        self.samples(body).last()
    }

    /// Min and max position over every body, used for the animation axis
    pub fn position_bounds(&self) -> Option<(f64, f64)> {
        self.trajectories
            .iter()
            .flat_map(|traj| traj.positions.iter().copied())
            .fold(None, |acc, x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
    }
}
