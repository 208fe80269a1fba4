pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::error::{report_invalid_argument, InvalidArgument};
pub use simulation::params::KinematicParameters;
pub use simulation::motion::{Movement, UniformlyAccelerated};
pub use simulation::grid::TimeGrid;
pub use simulation::runner::{SimulationRunner, SimulationResult, Trajectory, TrajectorySample};
pub use simulation::scenario::{build_runner, demo_scenario, two_body_scenario};

pub use configuration::config::{ValidationPolicy, SimulationConfig, BodyConfig, ScenarioConfig};
pub use configuration::input::{InputSource, ConsoleInput};

pub use visualization::sink::{RenderSink, ChartLayout, Quantity};
pub use visualization::table::TableSink;
pub use visualization::viewer::BevyViewer;

pub use benchmark::timing::{timed, bench_runner_curve};
