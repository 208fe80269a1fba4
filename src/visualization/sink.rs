//! Where simulation results go to be shown
//!
//! A [`RenderSink`] receives a finished `SimulationResult` together with its
//! grid and draws or exports it. The kinematic core never talks to a window
//! or a terminal directly.

use anyhow::Result;

use crate::simulation::grid::TimeGrid;
use crate::simulation::runner::{SimulationResult, Trajectory};

/// Which charts to draw and whether to play the position animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub show_acceleration: bool, // third chart, a vs t
    pub animate: bool, // playback panel with moving markers
}

impl ChartLayout {
    /// Quantities charted under this layout, top to bottom
    pub fn quantities(&self) -> Vec<Quantity> {
        let mut q = vec![Quantity::Position, Quantity::Velocity];
        if self.show_acceleration {
            q.push(Quantity::Acceleration);
        }
        q
    }
}

/// One kinematic quantity of a trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Position,
    Velocity,
    Acceleration,
}

impl Quantity {
    pub fn values(self, traj: &Trajectory) -> &[f64] {
        match self {
            Quantity::Position => &traj.positions,
            Quantity::Velocity => &traj.velocities,
            Quantity::Acceleration => &traj.accelerations,
        }
    }

    /// Axis label with unit
    pub fn axis_label(self) -> &'static str {
        match self {
            Quantity::Position => "Position (m)",
            Quantity::Velocity => "Velocity (m/s)",
            Quantity::Acceleration => "Acceleration (m/s²)",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Quantity::Position => "Position vs Time",
            Quantity::Velocity => "Velocity vs Time",
            Quantity::Acceleration => "Acceleration vs Time",
        }
    }

    /// Column suffix in tables
    pub fn symbol(self) -> &'static str {
        match self {
            Quantity::Position => "x",
            Quantity::Velocity => "v",
            Quantity::Acceleration => "a",
        }
    }
}

pub trait RenderSink {
    fn render(&mut self, result: &SimulationResult, grid: &TimeGrid, layout: ChartLayout) -> Result<()>;
}
