//! Build ready-to-run simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `SimulationRunner`
//! holding:
//! - the validated time grid (`TimeGrid`)
//! - one `UniformlyAccelerated` model per body, validated under the
//!   scenario's policy
//!
//! Also provides the two built-in scenarios: the single-body demo and the
//! two-body run fed by console input

use crate::configuration::config::{BodyConfig, ScenarioConfig, SimulationConfig, ValidationPolicy};
use crate::simulation::error::InvalidArgument;
use crate::simulation::grid::TimeGrid;
use crate::simulation::motion::UniformlyAccelerated;
use crate::simulation::runner::SimulationRunner;

/// Default grid of the two-body run
pub const TWO_BODY_MAX_TIME: f64 = 20.0;
pub const TWO_BODY_STEPS: usize = 200;

/// Grid of the single-body demo
pub const DEMO_MAX_TIME: f64 = 10.0;
pub const DEMO_STEPS: usize = 100;

/// Validate a scenario and turn it into a runner.
///
/// The grid is checked first so a bad `max_time`/`steps` is reported before
/// any body is looked at
pub fn build_runner(cfg: &ScenarioConfig) -> Result<SimulationRunner, InvalidArgument> {
    let sim = &cfg.simulation;
    // negative counts fold into 0 so TimeGrid reports them after max_time
    let steps = if sim.steps <= 0 { 0 } else { usize::try_from(sim.steps).unwrap_or(usize::MAX) };
    let grid = TimeGrid::new(sim.max_time, steps)?;

    if cfg.bodies.is_empty() {
        return Err(InvalidArgument::NoBodies);
    }

    let mut runner = SimulationRunner::new(grid);
    for (i, bc) in cfg.bodies.iter().enumerate() {
        let motion = UniformlyAccelerated::from_values(bc.x0, bc.v0, bc.a, sim.validation)?;
        let label = bc.label.clone().unwrap_or_else(|| default_label(i));
        runner = runner.with(label, motion);
    }

    log::info!(
        "built runner: {} bodies, t_max = {} s, {} steps, {:?} validation",
        runner.body_count(),
        grid.max_time(),
        grid.steps(),
        sim.validation
    );

    Ok(runner)
}

/// "Body 1", "Body 2", ...
pub fn default_label(index: usize) -> String {
    format!("Body {}", index + 1)
}

/// Single body, x0 = 0 m, v0 = 5 m/s, a = 2 m/s^2 over 10 s in 100 steps
pub fn demo_scenario() -> ScenarioConfig {
    ScenarioConfig {
        simulation: SimulationConfig {
            max_time: DEMO_MAX_TIME,
            steps: DEMO_STEPS as i64,
            validation: ValidationPolicy::Strict,
        },
        bodies: vec![BodyConfig::new(0.0, 5.0, 2.0)],
    }
}

/// Two bodies over 20 s in 200 steps
pub fn two_body_scenario(first: BodyConfig, second: BodyConfig) -> ScenarioConfig {
    ScenarioConfig {
        simulation: SimulationConfig {
            max_time: TWO_BODY_MAX_TIME,
            steps: TWO_BODY_STEPS as i64,
            validation: ValidationPolicy::Strict,
        },
        bodies: vec![first, second],
    }
}
