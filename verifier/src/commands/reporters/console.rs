use std::io::Write;

use colored::Colorize;

use crate::checks::CheckStatus;
use crate::commands::reporters::{Reporter, Summary};
use crate::commands::APP_NAME;
use crate::reports::Result;
use crate::utils::writer::Writer;

#[derive(Debug)]
pub struct ConsoleReporter {}

impl Reporter for ConsoleReporter {
    fn report(&self, writer: &mut Writer, summary: &Summary<'_>) -> Result<()> {
        for outcome in summary.outcomes {
            let label = match outcome.status {
                CheckStatus::Pass => "PASS".green(),
                CheckStatus::Fail(_) => "FAIL".red(),
                CheckStatus::Error(_) => "ERROR".red().bold(),
                CheckStatus::Skip(_) => "SKIP".yellow(),
            };
            writeln!(writer, "{label} {} ({}ms)", outcome.name, outcome.duration)?;

            if let Some(message) = outcome.status.message() {
                writeln!(writer, "    {message}")?;
            }
        }

        writeln!(
            writer,
            "{APP_NAME}: {} checks, {} passed, {} failed, {} errored, {} skipped",
            summary.outcomes.len(),
            summary.passed,
            summary.failed,
            summary.errored,
            summary.skipped
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckOutcome;
    use crate::reports::errors::Error;
    use crate::utils::writer::WriteBuffer;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_outcome_gets_a_line() {
        let outcomes = vec![
            CheckOutcome {
                name: "reports_exist",
                status: CheckStatus::Fail(Error::MissingFile(String::from("trace.combined.json"))),
                duration: 1,
            },
            CheckOutcome {
                name: "plugin_output",
                status: CheckStatus::Skip(String::from("`reports_exist` did not pass")),
                duration: 0,
            },
        ];
        let mut writer = Writer::new(WriteBuffer::Vec(vec![]), WriteBuffer::Vec(vec![]));
        ConsoleReporter {}
            .report(&mut writer, &Summary::from(outcomes.as_slice()))
            .unwrap();

        assert_eq!(
            writer.stripped().unwrap(),
            indoc! {r#"
                FAIL reports_exist (1ms)
                    Expected to have file at: trace.combined.json
                SKIP plugin_output (0ms)
                    `reports_exist` did not pass
                run-results-verifier: 2 checks, 0 passed, 1 failed, 0 errored, 1 skipped
            "#}
        );
    }
}
