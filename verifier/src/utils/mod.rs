use crate::{command::Command, commands};

pub mod reader;
pub mod writer;

pub fn get_verifier_commands() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(commands::verify::Verify::new()),
        Box::new(commands::junit_cases::JunitCases::new()),
        Box::new(commands::events::Events::new()),
        Box::new(commands::completions::Completions::new()),
    ]
}
