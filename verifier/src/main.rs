use std::collections::HashMap;
use std::process::exit;

use clap::{Arg, ArgAction};
use log::Level;

use run_results_verifier::commands::{APP_NAME, APP_VERSION, VERBOSE};
use run_results_verifier::utils::get_verifier_commands;
use run_results_verifier::utils::reader::{ReadBuffer, Reader};
use run_results_verifier::utils::writer::{WriteBuffer::Stderr, WriteBuffer::Stdout, Writer};
use run_results_verifier::Error;

fn main() -> Result<(), Error> {
    let mut app = clap::Command::new(APP_NAME)
        .version(APP_VERSION)
        .about(
            r#"
  Verifies the artifacts a mobile test run leaves behind. Checks that the expected
  reports exist, that the JUnit XML report has the expected passing and failing
  test cases, and that the plugin event log carries the expected testing results
  and tear down events. Any failed check makes the process exit non-zero."#,
        )
        .arg(
            Arg::new(VERBOSE.0)
                .long(VERBOSE.0)
                .short(VERBOSE.1)
                .action(ArgAction::Count)
                .global(true)
                .help("Sets the level of verbosity - add v's to increase output"),
        )
        .arg_required_else_help(true);

    let commands = get_verifier_commands();
    let mappings = commands.iter().map(|s| (s.name(), s)).fold(
        HashMap::with_capacity(commands.len()),
        |mut map, entry| {
            map.insert(entry.0, entry.1.as_ref());
            map
        },
    );

    for each in &commands {
        app = app.subcommand(each.command());
    }

    let help = app.render_usage();
    let app = app.get_matches();

    match app.subcommand() {
        Some((name, value)) => {
            if let Some(command) = mappings.get(name) {
                let log_level = match value.get_count(VERBOSE.0) {
                    0 => Level::Error,
                    1 => Level::Info,
                    2 => Level::Debug,
                    _ => Level::Trace,
                };
                simple_logger::init_with_level(log_level)?;
                log::debug!("running {name} with {value:?}");

                let mut output_writer =
                    Writer::new(Stdout(std::io::stdout()), Stderr(std::io::stderr()));

                match (*command).execute(
                    value,
                    &mut output_writer,
                    &mut Reader::new(ReadBuffer::Stdin(std::io::stdin())),
                ) {
                    Err(e) => {
                        output_writer.write_err(format!("Error occurred {e}"))?;
                        exit(-1);
                    }
                    Ok(code) => exit(code),
                }
            } else {
                println!("{help}");
            }
        }
        None => {
            println!("{help}");
        }
    }

    Ok(())
}
