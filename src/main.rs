use mruasim::{build_runner, demo_scenario, two_body_scenario};
use mruasim::{report_invalid_argument, ConsoleInput, InputSource, ScenarioConfig, ValidationPolicy};
use mruasim::{BevyViewer, RenderSink, TableSink};
use mruasim::{bench_runner_curve, timed};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Uniformly accelerated motion (MRUA) for one or two bodies")]
struct Args {
    /// Scenario file under scenarios/; prompts for two bodies when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Single-body demo with fixed parameters
    #[arg(long, conflicts_with = "file_name")]
    demo: bool,

    /// Print trajectories as CSV instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Accept zero acceleration and negative time
    #[arg(long)]
    lenient: bool,

    /// Print the runner benchmark curve and exit
    #[arg(long)]
    bench: bool,
}

fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn prompt_two_bodies() -> Result<ScenarioConfig> {
    println!("\n--- MRUA simulation with two bodies ---");

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout());
    let first = input.read_body("Body 1")?;
    let second = input.read_body("Body 2")?;

    Ok(two_body_scenario(first, second))
}

fn run(args: Args) -> Result<()> {
    if args.bench {
        bench_runner_curve(100_000, 5_000)?;
        return Ok(());
    }

    let mut cfg = if args.demo {
        demo_scenario()
    } else if let Some(file_name) = &args.file_name {
        load_scenario_from_yaml(file_name)?
    } else {
        prompt_two_bodies()?
    };

    if args.lenient {
        cfg.simulation.validation = ValidationPolicy::Lenient;
    }

    let runner = build_runner(&cfg)?;
    let layout = cfg.layout();

    let result = if runner.body_count() > 1 {
        timed("simulation run", || runner.run()).0?
    } else {
        runner.run()?
    };

    let mut sink: Box<dyn RenderSink> = if args.headless {
        Box::new(TableSink::new(io::stdout().lock()))
    } else {
        Box::new(BevyViewer::new("MRUA Simulator"))
    };
    sink.render(&result, runner.grid(), layout)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Bad input is reported on one line and the program still exits normally
    report_invalid_argument(run(args), &mut io::stdout())
}
