use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches};

use crate::checks::expectations::{Expectations, DEFAULT_RESULTS_DIR};
use crate::checks::{run_checks, select_checks, CheckContext};
use crate::command::Command;
use crate::commands::reporters::{
    get_reporter, OutputFormatType, Summary, JSON, JUNIT, SINGLE_LINE_SUMMARY, YAML,
};
use crate::commands::{CHECK, EXPECTATIONS, OUTPUT_FORMAT, RESULTS_DIR, VERIFY};
use crate::reports::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Verify {}

#[allow(clippy::new_without_default)]
impl Verify {
    pub fn new() -> Self {
        Verify {}
    }
}

impl Command for Verify {
    fn name(&self) -> &'static str {
        VERIFY
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(VERIFY)
            .about(
                r#"Verifies the artifacts of a test run. Checks that the expected reports exist
in the results directory, that the device JUnit report has the expected passing
and failing test cases, and that the plugin event log has the expected testing
results, a single tear down and no unknown events.
"#,
            )
            .arg(
                Arg::new(RESULTS_DIR.0)
                    .long(RESULTS_DIR.0)
                    .short(RESULTS_DIR.1)
                    .action(ArgAction::Set)
                    .default_value(DEFAULT_RESULTS_DIR)
                    .help("Directory holding the reports of the test run"),
            )
            .arg(
                Arg::new(EXPECTATIONS.0)
                    .long(EXPECTATIONS.0)
                    .short(EXPECTATIONS.1)
                    .action(ArgAction::Set)
                    .help("Provide a YAML or JSON file overriding the expected reports, test names and event counts"),
            )
            .arg(
                Arg::new(CHECK.0)
                    .long(CHECK.0)
                    .short(CHECK.1)
                    .action(ArgAction::Append)
                    .help("Only run the named check. Supports passing multiple values by using this option repeatedly.\
                          \nAvailable checks: reports_exist, junit_contents, plugin_output"),
            )
            .arg(
                Arg::new(OUTPUT_FORMAT.0)
                    .long(OUTPUT_FORMAT.0)
                    .short(OUTPUT_FORMAT.1)
                    .value_parser([SINGLE_LINE_SUMMARY, JSON, YAML, JUNIT])
                    .default_value(SINGLE_LINE_SUMMARY)
                    .action(ArgAction::Set)
                    .help("Specify the format in which the output should be displayed"),
            )
    }

    fn execute(&self, app: &ArgMatches, writer: &mut Writer, _: &mut Reader) -> Result<i32> {
        let results_dir = PathBuf::from(
            app.get_one::<String>(RESULTS_DIR.0)
                .map_or(DEFAULT_RESULTS_DIR, String::as_str),
        );

        let expectations = match app.get_one::<String>(EXPECTATIONS.0) {
            Some(file) => Expectations::from_file(file)?,
            None => Expectations::default(),
        };

        let names = app
            .get_many::<String>(CHECK.0)
            .map(|names| names.cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        let checks = select_checks(&names)?;

        let output_format = OutputFormatType::try_from(
            app.get_one::<String>(OUTPUT_FORMAT.0)
                .map_or(SINGLE_LINE_SUMMARY, String::as_str),
        )?;

        log::info!(
            "verifying {} checks against {}",
            checks.len(),
            results_dir.display()
        );
        log::debug!("expectations {:?}", expectations);

        let context = CheckContext {
            results_dir: &results_dir,
            expectations: &expectations,
        };
        let outcomes = run_checks(&checks, &context);
        let summary = Summary::from(outcomes.as_slice());

        let suite_name = results_dir.display().to_string();
        get_reporter(output_format, &suite_name).report(writer, &summary)?;

        Ok(summary.exit_code())
    }
}
