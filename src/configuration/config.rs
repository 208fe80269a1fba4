//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`SimulationConfig`] – time grid and validation policy
//! - [`BodyConfig`]       – initial state and acceleration of each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A two-body scenario matching these types:
//!
//! ```yaml
//! simulation:
//!   max_time: 20.0          # last sample time, s
//!   steps: 200              # number of intervals (samples = steps + 1)
//!   validation: strict      # or "lenient"
//!
//! bodies:
//!   - label: "Body 1"
//!     x0: 0.0               # initial position, m
//!     v0: 5.0               # initial velocity, m/s
//!     a: 2.0                # acceleration, m/s^2
//!   - x0: 10.0              # label defaults to "Body 2"
//!     v0: -1.0
//!     a: 0.5
//! ```
//!
//! `simulation::scenario::build_runner` maps this into a ready
//! `SimulationRunner`.

use std::io::Read;

use serde::Deserialize;

use crate::simulation::error::InvalidArgument;
use crate::visualization::sink::ChartLayout;

/// How strictly the kinematic model checks its inputs
/// `validation: "strict"` or `validation: "lenient"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    #[default]
    #[serde(rename = "strict")] // Reject zero acceleration and negative time
    Strict,

    #[serde(rename = "lenient")] // Evaluate the formulas as written
    Lenient,
}

/// Time grid and validation settings for a run
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub max_time: f64, // last sample time
    pub steps: i64, // intervals on [0, max_time], checked positive when the runner is built
    #[serde(default)]
    pub validation: ValidationPolicy, // strict when omitted
}

/// Configuration for a single body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    #[serde(default)]
    pub label: Option<String>, // chart/table label, "Body N" when omitted
    pub x0: f64, // initial position
    pub v0: f64, // initial velocity
    pub a: f64, // constant acceleration
}

impl BodyConfig {
    pub fn new(x0: f64, v0: f64, a: f64) -> Self {
        Self { label: None, x0, v0, a }
    }

    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub simulation: SimulationConfig, // grid and policy
    pub bodies: Vec<BodyConfig>, // bodies evaluated over the shared grid
}

impl ScenarioConfig {
    /// Parse a scenario. A document that doesn't fit the schema (missing
    /// field, text where a number belongs) is a rejected argument like any
    /// other bad input
    pub fn from_yaml_str(s: &str) -> Result<Self, InvalidArgument> {
        serde_yaml::from_str(s).map_err(malformed)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InvalidArgument> {
        serde_yaml::from_reader(reader).map_err(malformed)
    }

    /// A single body gets position/velocity charts only;
    /// two or more get the acceleration chart and the playback animation
    pub fn layout(&self) -> ChartLayout {
        let multi = self.bodies.len() > 1;
        ChartLayout {
            show_acceleration: multi,
            animate: multi,
        }
    }
}

fn malformed(e: serde_yaml::Error) -> InvalidArgument {
    InvalidArgument::MalformedScenario { reason: e.to_string() }
}
