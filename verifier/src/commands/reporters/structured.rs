use serde::Serialize;

use crate::commands::reporters::{Reporter, Summary};
use crate::reports::Result;
use crate::utils::writer::Writer;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StructuredFormat {
    Json,
    Yaml,
}

#[derive(Debug)]
pub struct StructuredReporter {
    format: StructuredFormat,
}

impl StructuredReporter {
    pub fn new(format: StructuredFormat) -> Self {
        StructuredReporter { format }
    }
}

#[derive(Debug, Serialize)]
struct StructuredOutcome<'report> {
    name: &'report str,
    status: &'report str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    duration_ms: u64,
}

#[derive(Debug, Serialize)]
struct StructuredReport<'report> {
    checks: Vec<StructuredOutcome<'report>>,
    passed: usize,
    failed: usize,
    errored: usize,
    skipped: usize,
    exit_code: i32,
}

fn millis(duration: u128) -> u64 {
    u64::try_from(duration).unwrap_or(u64::MAX)
}

impl Reporter for StructuredReporter {
    fn report(&self, writer: &mut Writer, summary: &Summary<'_>) -> Result<()> {
        let report = StructuredReport {
            checks: summary
                .outcomes
                .iter()
                .map(|outcome| StructuredOutcome {
                    name: outcome.name,
                    status: outcome.status.label(),
                    message: outcome.status.message(),
                    duration_ms: millis(outcome.duration),
                })
                .collect(),
            passed: summary.passed,
            failed: summary.failed,
            errored: summary.errored,
            skipped: summary.skipped,
            exit_code: summary.exit_code(),
        };

        match self.format {
            StructuredFormat::Json => serde_json::to_writer_pretty(writer, &report)?,
            StructuredFormat::Yaml => serde_yaml::to_writer(writer, &report)?,
        }

        Ok(())
    }
}
