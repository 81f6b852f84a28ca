pub mod completions;
pub mod events;
pub mod junit_cases;
pub mod reporters;
pub mod verify;

use clap::ArgMatches;

use crate::reports::errors::Error;
use crate::reports::files::read_path_content;
use crate::reports::Result;
use crate::utils::reader::Reader;

//
// Constants
//
// Application metadata
pub const APP_NAME: &str = "run-results-verifier";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
// Commands
pub const VERIFY: &str = "verify";
pub const JUNIT_CASES: &str = "junit-cases";
pub const EVENTS: &str = "events";
pub const COMPLETIONS: &str = "completions";
// Arguments for verify
pub const RESULTS_DIR: (&str, char) = ("results-dir", 'd');
pub const EXPECTATIONS: (&str, char) = ("expectations", 'e');
pub const CHECK: (&str, char) = ("check", 'c');
pub const OUTPUT_FORMAT: (&str, char) = ("output-format", 'o');
// Arguments for junit-cases, events
pub const FILE: (&str, char) = ("file", 'f');
pub const PRINT_JSON: (&str, char) = ("print-json", 'p');
// Arguments for completions
pub const SHELL: (&str, char) = ("shell", 's');
pub const LOCATION: (&str, char) = ("location", 'l');
// Global arguments
pub const VERBOSE: (&str, char) = ("verbose", 'v');

pub const SUCCESS_STATUS_CODE: i32 = 0;
pub const ERROR_STATUS_CODE: i32 = 5;
pub const FAILURE_STATUS_CODE: i32 = 19;

/// Content of `--file` when given, otherwise everything piped on stdin.
pub(crate) fn read_input(app: &ArgMatches, reader: &mut Reader) -> Result<String> {
    if let Some(file) = app.get_one::<String>(FILE.0) {
        return read_path_content(file);
    }

    if reader.is_exhausted()? {
        return Err(Error::IllegalArguments(format!(
            "no input, provide `--{}` or pipe a document on stdin",
            FILE.0
        )));
    }
    Ok(reader.read_content()?)
}
