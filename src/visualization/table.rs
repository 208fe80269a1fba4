//! Headless rendering: trajectories as a CSV table
//!
//! One row per grid sample, one column per body and charted quantity.
//! Paste output directly into a spreadsheet to graph.

use std::io::Write;

use anyhow::Result;

use crate::simulation::grid::TimeGrid;
use crate::simulation::runner::SimulationResult;
use crate::visualization::sink::{ChartLayout, RenderSink};

pub struct TableSink<W> {
    out: W,
}

impl<W: Write> TableSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TableSink<W> {
    fn render(&mut self, result: &SimulationResult, _grid: &TimeGrid, layout: ChartLayout) -> Result<()> {
        let quantities = layout.quantities();

        // header: t,Body 1 x,Body 1 v,...
        let mut header = vec!["t".to_string()];
        for traj in &result.trajectories {
            for q in &quantities {
                header.push(csv_field(&format!("{} {}", traj.label, q.symbol())));
            }
        }
        writeln!(self.out, "{}", header.join(","))?;

        for (i, t) in result.times.iter().enumerate() {
            let mut row = vec![t.to_string()];
            for traj in &result.trajectories {
                for q in &quantities {
                    row.push(q.values(traj)[i].to_string());
                }
            }
            writeln!(self.out, "{}", row.join(","))?;
        }

        self.out.flush()?;
        log::info!("wrote {} rows for {} bodies", result.times.len(), result.trajectories.len());
        Ok(())
    }
}

/// Quote a field holding a comma, quote or line break; inner quotes are doubled
pub fn csv_field(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
