//! Runs scenarios in order and separates their output.

use std::io::{self, Write};
use thiserror::Error;

use crate::scenario::{Scenario, SCENARIOS};

/// Emitted after every scenario.
pub const SEPARATOR: &str = "\n\n";

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("no scenario matches `{0}`")]
    NoMatchingScenario(String),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Picks the scenarios whose name contains `filter`, keeping their order.
/// With no filter every scenario is selected.
pub fn select(filter: Option<&str>) -> Result<Vec<Scenario>, DriverError> {
    let selected: Vec<Scenario> = SCENARIOS
        .iter()
        .filter(|scenario| filter.map_or(true, |f| scenario.name.contains(f)))
        .copied()
        .collect();

    match filter {
        Some(f) if selected.is_empty() => Err(DriverError::NoMatchingScenario(f.to_string())),
        _ => Ok(selected),
    }
}

/// Runs each scenario, writing the separator after it, then flushes.
pub fn run_scenarios(out: &mut dyn Write, scenarios: &[Scenario]) -> Result<(), DriverError> {
    for scenario in scenarios {
        (scenario.run)(out)?;
        write!(out, "{}", SEPARATOR)?;
    }
    out.flush()?;
    Ok(())
}

/// Runs every scenario in order.
pub fn run_all(out: &mut dyn Write) -> Result<(), DriverError> {
    run_scenarios(out, &SCENARIOS)
}

/// Writes one scenario name per line.
pub fn list(out: &mut dyn Write) -> Result<(), DriverError> {
    for scenario in &SCENARIOS {
        writeln!(out, "{}", scenario.name)?;
    }
    Ok(())
}
