pub mod console;
pub mod junit;
pub mod structured;

use crate::checks::{CheckOutcome, CheckStatus};
use crate::commands::{ERROR_STATUS_CODE, FAILURE_STATUS_CODE, SUCCESS_STATUS_CODE};
use crate::reports::errors::Error;
use crate::reports::Result;
use crate::utils::writer::Writer;

pub const SINGLE_LINE_SUMMARY: &str = "single-line-summary";
pub const JSON: &str = "json";
pub const YAML: &str = "yaml";
pub const JUNIT: &str = "junit";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormatType {
    SingleLineSummary,
    Json,
    Yaml,
    Junit,
}

impl TryFrom<&str> for OutputFormatType {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            SINGLE_LINE_SUMMARY => Ok(OutputFormatType::SingleLineSummary),
            JSON => Ok(OutputFormatType::Json),
            YAML => Ok(OutputFormatType::Yaml),
            JUNIT => Ok(OutputFormatType::Junit),
            _ => Err(Error::IllegalArguments(format!(
                "unsupported output format `{value}`"
            ))),
        }
    }
}

pub trait Reporter {
    fn report(&self, writer: &mut Writer, summary: &Summary<'_>) -> Result<()>;
}

pub fn get_reporter<'report>(
    output_format: OutputFormatType,
    suite_name: &'report str,
) -> Box<dyn Reporter + 'report> {
    match output_format {
        OutputFormatType::SingleLineSummary => Box::new(console::ConsoleReporter {}),
        OutputFormatType::Json => Box::new(structured::StructuredReporter::new(
            structured::StructuredFormat::Json,
        )),
        OutputFormatType::Yaml => Box::new(structured::StructuredReporter::new(
            structured::StructuredFormat::Yaml,
        )),
        OutputFormatType::Junit => Box::new(junit::JunitReporter { name: suite_name }),
    }
}

/// Outcomes of one verification run with their tallies.
#[derive(Debug)]
pub struct Summary<'outcome> {
    pub outcomes: &'outcome [CheckOutcome],
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub skipped: usize,
    /// milliseconds
    pub duration: u128,
}

impl<'outcome> From<&'outcome [CheckOutcome]> for Summary<'outcome> {
    fn from(outcomes: &'outcome [CheckOutcome]) -> Self {
        outcomes.iter().fold(
            Summary {
                outcomes,
                passed: 0,
                failed: 0,
                errored: 0,
                skipped: 0,
                duration: 0,
            },
            |mut summary, outcome| {
                match outcome.status {
                    CheckStatus::Pass => summary.passed += 1,
                    CheckStatus::Fail(_) => summary.failed += 1,
                    CheckStatus::Error(_) => summary.errored += 1,
                    CheckStatus::Skip(_) => summary.skipped += 1,
                }
                summary.duration += outcome.duration;
                summary
            },
        )
    }
}

impl Summary<'_> {
    /// Errors take precedence over failures.
    pub fn exit_code(&self) -> i32 {
        if self.errored > 0 {
            ERROR_STATUS_CODE
        } else if self.failed > 0 {
            FAILURE_STATUS_CODE
        } else {
            SUCCESS_STATUS_CODE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn outcome(name: &'static str, status: CheckStatus) -> CheckOutcome {
        CheckOutcome {
            name,
            status,
            duration: 2,
        }
    }

    #[rstest]
    #[case(SINGLE_LINE_SUMMARY, OutputFormatType::SingleLineSummary)]
    #[case(JSON, OutputFormatType::Json)]
    #[case(YAML, OutputFormatType::Yaml)]
    #[case(JUNIT, OutputFormatType::Junit)]
    fn output_formats_parse(#[case] value: &str, #[case] expected: OutputFormatType) {
        assert_eq!(OutputFormatType::try_from(value).unwrap(), expected);
    }

    #[test]
    fn unknown_output_format_is_illegal() {
        assert!(matches!(
            OutputFormatType::try_from("sarif"),
            Err(Error::IllegalArguments(_))
        ));
    }

    #[test]
    fn errors_take_precedence_over_failures() {
        let outcomes = vec![
            outcome("reports_exist", CheckStatus::Pass),
            outcome(
                "junit_contents",
                CheckStatus::Fail(Error::MissingFile(String::from("a.xml"))),
            ),
            outcome(
                "plugin_output",
                CheckStatus::Error(Error::MalformedDocument(String::from("b.json"))),
            ),
        ];
        let summary = Summary::from(outcomes.as_slice());

        assert_eq!(
            (summary.passed, summary.failed, summary.errored, summary.skipped),
            (1, 1, 1, 0)
        );
        assert_eq!(summary.duration, 6);
        assert_eq!(summary.exit_code(), ERROR_STATUS_CODE);
    }

    #[test]
    fn skipped_checks_alone_do_not_fail() {
        let outcomes = vec![
            outcome("reports_exist", CheckStatus::Pass),
            outcome("plugin_output", CheckStatus::Skip(String::from("skipped"))),
        ];
        assert_eq!(
            Summary::from(outcomes.as_slice()).exit_code(),
            SUCCESS_STATUS_CODE
        );
    }
}
