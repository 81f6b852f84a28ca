use std::io::Write;

use clap::{Arg, ArgAction, ArgMatches};

use crate::command::Command;
use crate::commands::{read_input, FILE, JUNIT_CASES, PRINT_JSON, SUCCESS_STATUS_CODE};
use crate::reports::junit::read_test_cases;
use crate::reports::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct JunitCases {}

#[allow(clippy::new_without_default)]
impl JunitCases {
    pub fn new() -> Self {
        JunitCases {}
    }
}

impl Command for JunitCases {
    fn name(&self) -> &'static str {
        JUNIT_CASES
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(JUNIT_CASES)
            .about("Prints the non-skipped test cases of a JUnit XML report, one flat record per case.")
            .arg(
                Arg::new(FILE.0)
                    .long(FILE.0)
                    .short(FILE.1)
                    .action(ArgAction::Set)
                    .help("Provide a JUnit XML report, read from stdin when not present"),
            )
            .arg(
                Arg::new(PRINT_JSON.0)
                    .long(PRINT_JSON.0)
                    .short(PRINT_JSON.1)
                    .action(ArgAction::SetTrue)
                    .help("Print output in JSON format, YAML is the default"),
            )
    }

    fn execute(&self, app: &ArgMatches, writer: &mut Writer, reader: &mut Reader) -> Result<i32> {
        let content = read_input(app, reader)?;

        let cases = read_test_cases(&content)?;
        log::info!(
            "{} test cases, {} failed, {} skipped",
            cases.records.len(),
            cases.records.iter().filter(|record| record.is_failed()).count(),
            cases.skipped
        );

        if app.get_flag(PRINT_JSON.0) {
            serde_json::to_writer_pretty(&mut *writer, &cases.records)?;
            writeln!(writer)?;
        } else {
            serde_yaml::to_writer(writer, &cases.records)?;
        }

        Ok(SUCCESS_STATUS_CODE)
    }
}
