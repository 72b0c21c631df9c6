//! Checking inputs and reporting results.

use std::io::Read;
use std::time::{Duration, Instant};

use lept_json::{parse_value, Value};
use rayon::prelude::*;

use crate::config::{CheckConfig, Input};
use crate::CheckError;

/// Result of checking one input.
#[derive(Debug)]
pub struct Report {
    pub input: Input,
    pub outcome: Result<Value, CheckError>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Render the report line, or `None` when `config` suppresses it.
    pub fn render(&self, config: &CheckConfig) -> Option<String> {
        match &self.outcome {
            Ok(_) if config.quiet => None,
            Ok(value) if config.verbose => Some(match value.as_number() {
                Some(n) => format!("{}: ok {} {n}", self.input, value.tag()),
                None => format!("{}: ok {}", self.input, value.tag()),
            }),
            Ok(_) => Some(format!("{}: ok", self.input)),
            Err(err) => Some(format!("{}: error: {err}", self.input)),
        }
    }
}

/// Aggregate of all reports, in input order.
#[derive(Debug, Default)]
pub struct Summary {
    pub reports: Vec<Report>,
    pub duration: Duration,
}

impl Summary {
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.passed()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

/// Parse one text as a single JSON scalar.
pub fn check_source(source: &str) -> Result<Value, CheckError> {
    Ok(parse_value(source)?)
}

/// Read and check one input.
#[tracing::instrument(level = "debug", skip_all, fields(input = %input))]
pub fn check_input(input: &Input) -> Report {
    let outcome = read_input(input).and_then(|source| check_source(&source));
    if let Err(err) = &outcome {
        tracing::debug!(%err, "input rejected");
    }
    Report {
        input: input.clone(),
        outcome,
    }
}

fn read_input(input: &Input) -> Result<String, CheckError> {
    match input {
        Input::Stdin => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|err| CheckError::Io {
                    input: input.to_string(),
                    source: err,
                })?;
            Ok(source)
        }
        Input::Path(path) => std::fs::read_to_string(path).map_err(|err| CheckError::Io {
            input: input.to_string(),
            source: err,
        }),
    }
}

/// Runs checks over a list of inputs.
pub struct Checker {
    config: CheckConfig,
}

impl Checker {
    pub fn new(config: CheckConfig) -> Self {
        Checker { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Check every input. Reports come back in input order.
    pub fn run(&self, inputs: &[Input]) -> Summary {
        let start = Instant::now();
        let reports = if self.config.parallel && inputs.len() > 1 {
            Self::run_parallel(inputs)
        } else {
            Self::run_sequential(inputs)
        };
        Summary {
            reports,
            duration: start.elapsed(),
        }
    }

    fn run_sequential(inputs: &[Input]) -> Vec<Report> {
        inputs.iter().map(check_input).collect()
    }

    /// Check inputs on a scoped rayon pool, cleaned up before returning.
    fn run_parallel(inputs: &[Input]) -> Vec<Report> {
        rayon::ThreadPoolBuilder::new()
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pool.install(|| inputs.par_iter().map(check_input).collect::<Vec<_>>())
            })
            .unwrap_or_else(|e| {
                tracing::warn!("failed to create thread pool ({e}), running sequentially");
                Self::run_sequential(inputs)
            })
    }
}

#[cfg(test)]
mod tests;
