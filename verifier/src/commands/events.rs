use std::io::Write;

use clap::{Arg, ArgAction, ArgMatches};

use crate::command::Command;
use crate::commands::{read_input, EVENTS, FILE, PRINT_JSON, SUCCESS_STATUS_CODE};
use crate::reports::events::{classify_events_from_str, EventSummary};
use crate::reports::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Events {}

#[allow(clippy::new_without_default)]
impl Events {
    pub fn new() -> Self {
        Events {}
    }
}

impl Command for Events {
    fn name(&self) -> &'static str {
        EVENTS
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(EVENTS)
            .about(
                r#"Classifies a plugin event log by eventType and prints the testing result,
tear down and unknown buckets along with the sorted test entry and run names.
"#,
            )
            .arg(
                Arg::new(FILE.0)
                    .long(FILE.0)
                    .short(FILE.1)
                    .action(ArgAction::Set)
                    .help("Provide a JSON plugin event log, read from stdin when not present"),
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

        let buckets = classify_events_from_str(&content)?;
        let summary = EventSummary::from(&buckets);

        if app.get_flag(PRINT_JSON.0) {
            serde_json::to_writer_pretty(&mut *writer, &summary)?;
            writeln!(writer)?;
        } else {
            serde_yaml::to_writer(writer, &summary)?;
        }

        Ok(SUCCESS_STATUS_CODE)
    }
}
