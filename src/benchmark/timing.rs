//! Wall-clock timing around simulation runs
//!
//! [`timed`] wraps a call at the call site and logs how long it took; the
//! simulation types themselves carry no timing code.
//! [`bench_runner_curve`] prints a CSV of run time against step count.

use std::time::{Duration, Instant};

use crate::configuration::config::BodyConfig;
use crate::simulation::error::InvalidArgument;
use crate::simulation::scenario::{build_runner, two_body_scenario};

/// Run `f`, log its duration under `label`, return its value and the duration
pub fn timed<T, F>(label: &str, f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let t0 = Instant::now();
    let value = f();
    let elapsed = t0.elapsed();
    log::info!("{label} ran in {:.6} s", elapsed.as_secs_f64());
    (value, elapsed)
}

/// Benchmark a two-body run for step counts `stride, 2*stride, ..., max_steps`
/// Paste output directly into a spreadsheet to graph
pub fn bench_runner_curve(max_steps: usize, stride: usize) -> Result<(), InvalidArgument> {
    if stride == 0 {
        return Err(InvalidArgument::NonPositiveSteps);
    }

    println!("steps,ms");

    for steps in (stride..=max_steps).step_by(stride) {
        let mut cfg = two_body_scenario(BodyConfig::new(0.0, 5.0, 2.0), BodyConfig::new(100.0, -3.0, 0.5));
        cfg.simulation.steps = steps as i64;
        let runner = build_runner(&cfg)?;

        // Small grids: average over a few runs to smooth noise
        let repeats: u32 = if steps <= 10_000 { 5 } else { 1 };

        let t0 = Instant::now();
        for _ in 0..repeats {
            runner.run()?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

        println!("{},{:.6}", steps, ms);
    }

    Ok(())
}
