use std::fs::File;
use std::io::Write;
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, ValueEnum};

use crate::command::Command;
use crate::commands::{APP_NAME, APP_VERSION, COMPLETIONS, LOCATION, SHELL, SUCCESS_STATUS_CODE};
use crate::reports::errors::Error;
use crate::reports::Result;
use crate::utils::get_verifier_commands;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

#[derive(Copy, Clone, ValueEnum, Debug, Eq, PartialEq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

impl Shell {
    /// File extension scripts for this shell are conventionally saved with.
    pub fn extension(&self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
            Shell::PowerShell => "ps1",
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Completions {}

#[allow(clippy::new_without_default)]
impl Completions {
    pub fn new() -> Self {
        Completions {}
    }
}

impl Command for Completions {
    fn name(&self) -> &'static str {
        COMPLETIONS
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(COMPLETIONS)
            .about("Generates a shell completions script")
            .arg(
                Arg::new(SHELL.0)
                    .long(SHELL.0)
                    .short(SHELL.1)
                    .value_parser(clap::value_parser!(Shell))
                    .action(ArgAction::Set)
                    .required(true)
                    .help("the shell you are currently running"),
            )
            .arg(
                Arg::new(LOCATION.0)
                    .long(LOCATION.0)
                    .short(LOCATION.1)
                    .action(ArgAction::Set)
                    .help("the directory the completions script is written to, if no value is present the script is written to stdout"),
            )
    }

    fn execute(&self, app: &ArgMatches, writer: &mut Writer, _: &mut Reader) -> Result<i32> {
        let mut cli = clap::Command::new(APP_NAME).version(APP_VERSION);
        for each in get_verifier_commands() {
            cli = cli.subcommand(each.command());
        }

        let shell = app.get_one::<Shell>(SHELL.0).copied().ok_or_else(|| {
            Error::IllegalArguments(format!("`--{}` is required", SHELL.0))
        })?;

        let mut out: Box<dyn Write + '_> = match app.get_one::<String>(LOCATION.0) {
            Some(location) => {
                let path = Path::new(location);
                if !path.is_dir() {
                    return Err(Error::InvalidCompletionsPath(location.to_string()));
                }

                let script = path.join(format!("{APP_NAME}.{}", shell.extension()));
                log::info!("writing completions to {}", script.display());
                Box::new(File::create(script)?)
            }
            None => Box::new(writer),
        };

        match shell {
            Shell::Bash => {
                clap_complete::generate(clap_complete::shells::Bash, &mut cli, APP_NAME, &mut out)
            }
            Shell::Zsh => {
                clap_complete::generate(clap_complete::shells::Zsh, &mut cli, APP_NAME, &mut out)
            }
            Shell::Fish => {
                clap_complete::generate(clap_complete::shells::Fish, &mut cli, APP_NAME, &mut out)
            }
            Shell::PowerShell => clap_complete::generate(
                clap_complete::shells::PowerShell,
                &mut cli,
                APP_NAME,
                &mut out,
            ),
        }

        Ok(SUCCESS_STATUS_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Shell::Bash, "bash")]
    #[case(Shell::Zsh, "zsh")]
    #[case(Shell::Fish, "fish")]
    #[case(Shell::PowerShell, "ps1")]
    fn script_extension_follows_shell(#[case] shell: Shell, #[case] extension: &str) {
        assert_eq!(shell.extension(), extension);
    }
}
