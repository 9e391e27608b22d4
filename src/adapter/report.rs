//! Text and JSON rendering of simulation results.

use std::fmt;

use serde::Serialize;

use crate::common::Result;
use crate::sim::{Comparison, SimulationResult};

/// Width of a full fault bar, in characters.
const BAR_WIDTH: usize = 40;

/// Fill percentage of a fault bar, relative to the worst policy.
///
/// Never drops below 2% so a zero-fault policy still shows a sliver.
pub fn fault_bar_percent(faults: usize, max_faults: usize) -> usize {
    let ratio = if max_faults == 0 {
        1.0
    } else {
        faults as f64 / max_faults as f64
    };
    ((ratio * 100.0).round() as usize).clamp(2, 100)
}

/// One line per policy: fault count plus a bar scaled to the worst policy.
pub struct Summary<'a, P>(pub &'a Comparison<P>);

impl<P> fmt::Display for Summary<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_faults = self.0.max_faults();
        let name_width = self
            .0
            .iter()
            .map(|r| r.policy.name().len())
            .max()
            .unwrap_or(0);

        for result in self.0.iter() {
            let percent = fault_bar_percent(result.fault_count, max_faults);
            let filled = percent * BAR_WIDTH / 100;
            writeln!(
                f,
                "{:<width$} page faults: {:>3}  [{}{}] {:>3}%",
                result.policy.name(),
                result.fault_count,
                "#".repeat(filled),
                " ".repeat(BAR_WIDTH - filled),
                percent,
                width = name_width,
            )?;
        }
        Ok(())
    }
}

/// Step-by-step frame table of one result.
///
/// ```text
/// FIFO step-by-step (10 faults)
/// #/t       |  0  1  2  3 ...
/// Ref       |  7  0  1  2 ...
/// Frame 1   | 7*  7  7 2* ...
/// Frame 2   |    0*  0  0 ...
/// Hit/Fault |  F  F  F  F ...
/// ```
///
/// A `*` marks a frame whose page changed in that step.
pub struct StepTable<'a, P>(pub &'a SimulationResult<P>);

impl<P: fmt::Display + PartialEq> StepTable<'_, P> {
    fn rows(&self) -> Vec<(String, Vec<String>)> {
        let steps = &self.0.steps;
        let mut rows = Vec::with_capacity(self.0.capacity + 3);

        rows.push((
            "#/t".to_string(),
            steps.iter().map(|s| s.time.to_string()).collect(),
        ));
        rows.push((
            "Ref".to_string(),
            steps.iter().map(|s| s.page.to_string()).collect(),
        ));

        for slot in 0..self.0.capacity {
            let mut previous: Option<&P> = None;
            let cells = steps
                .iter()
                .map(|s| {
                    let current = s.frames.as_slice().get(slot).and_then(Option::as_ref);
                    let cell = match current {
                        Some(page) if current != previous => format!("{}*", page),
                        Some(page) => page.to_string(),
                        None => String::new(),
                    };
                    previous = current;
                    cell
                })
                .collect();
            rows.push((format!("Frame {}", slot + 1), cells));
        }

        rows.push((
            "Hit/Fault".to_string(),
            steps
                .iter()
                .map(|s| if s.hit { "H" } else { "F" }.to_string())
                .collect(),
        ));
        rows
    }
}

impl<P: fmt::Display + PartialEq> fmt::Display for StepTable<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} step-by-step ({} faults)",
            self.0.policy, self.0.fault_count
        )?;

        let rows = self.rows();
        let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let widths: Vec<usize> = (0..self.0.steps.len())
            .map(|col| {
                rows.iter()
                    .map(|(_, cells)| cells[col].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (label, cells) in &rows {
            write!(f, "{:<width$} |", label, width = label_width)?;
            for (cell, width) in cells.iter().zip(&widths) {
                write!(f, " {:>width$}", cell, width = *width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render the fault summary of `comparison`.
pub fn render_summary<P>(comparison: &Comparison<P>) -> String {
    Summary(comparison).to_string()
}

/// Render the step table of every result in `comparison`, blank-line separated.
pub fn render_steps<P: fmt::Display + PartialEq>(comparison: &Comparison<P>) -> String {
    comparison
        .iter()
        .map(|result| StepTable(result).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON of `comparison`.
pub fn render_json<P: Serialize>(comparison: &Comparison<P>) -> Result<String> {
    Ok(serde_json::to_string_pretty(comparison)?)
}
