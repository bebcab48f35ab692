//! Structured form of the benchmark binary's printed timings.

use std::time::Duration;

use snafu::OptionExt;

use crate::error::{MalformedReportValueSnafu, MissingReportLineSnafu, Result};

/// Stdout line prefixes printed by the generated driver.
const PARTITIONED_LINE: &str = "partitioned loop time:";
const REFERENCE_LINE: &str = "reference loop time:";

/// Parsed timings of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchReport {
    /// Elapsed time of the partitioned reduction.
    pub partitioned: Duration,
    /// Elapsed time of the reference reduction.
    pub reference: Duration,
}

impl BenchReport {
    /// Parse the two elapsed-time lines from the benchmark's stdout.
    pub fn parse(stdout: &str) -> Result<Self> {
        Ok(Self {
            partitioned: parse_seconds_line(stdout, PARTITIONED_LINE)?,
            reference: parse_seconds_line(stdout, REFERENCE_LINE)?,
        })
    }

    /// Reference time divided by partitioned time.
    pub fn speedup(&self) -> f64 {
        self.reference.as_secs_f64() / self.partitioned.as_secs_f64()
    }
}

fn parse_seconds_line(stdout: &str, prefix: &str) -> Result<Duration> {
    let line = stdout.lines().find(|l| l.starts_with(prefix)).context(MissingReportLineSnafu { line: prefix })?;
    let value = line[prefix.len()..].trim();

    let seconds = value
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite() && *s >= 0.0)
        .context(MalformedReportValueSnafu { line: prefix, value })?;

    Ok(Duration::from_secs_f64(seconds))
}
