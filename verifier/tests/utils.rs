// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::PathBuf;

use run_results_verifier::utils;
use run_results_verifier::utils::reader::ReadBuffer::{Cursor as ReadCursor, File as ReadFile};
use run_results_verifier::utils::reader::Reader;
use run_results_verifier::utils::writer::WriteBuffer::Vec as WBVec;
use run_results_verifier::utils::writer::Writer;

#[non_exhaustive]
pub struct StatusCode;

const VERIFIER_TEST_APP_NAME: &str = "run-results-verifier-test";

#[allow(dead_code)]
impl StatusCode {
    pub const SUCCESS: i32 = 0;
    pub const INTERNAL_FAILURE: i32 = -1;
    pub const PREPROCESSOR_ERROR: i32 = -3;
    pub const PARSING_ERROR: i32 = 5;
    pub const VERIFICATION_FAILURE: i32 = 19;
}

#[allow(dead_code)]
pub fn read_from_resource_file(path: &str) -> String {
    let mut content = String::new();
    let mut reader = BufReader::new(File::open(get_full_path_for_resource_file(path)).unwrap());
    reader.read_to_string(&mut content).unwrap();

    content
}

pub fn get_full_path_for_resource_file(path: &str) -> String {
    let mut resource = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    resource.push(path);
    resource.display().to_string()
}

pub fn buffer_writer() -> Writer {
    Writer::new(WBVec(vec![]), WBVec(vec![]))
}

#[allow(dead_code)]
pub fn get_reader(path: &str) -> Reader {
    let file = File::open(get_full_path_for_resource_file(path)).expect("failed to find mocked file");

    Reader::new(ReadFile(file))
}

#[allow(dead_code)]
pub fn string_reader(content: &str) -> Reader {
    Reader::new(ReadCursor(Cursor::new(content.as_bytes().to_vec())))
}

pub trait CommandTestRunner {
    fn build_args(&self) -> Vec<String>;

    fn run(&self, writer: &mut Writer, reader: &mut Reader) -> i32 {
        let mut app = clap::Command::new(VERIFIER_TEST_APP_NAME);

        let command_options = self.build_args().into_iter().fold(
            vec![String::from(VERIFIER_TEST_APP_NAME)],
            |mut res, arg| {
                res.push(arg);
                res
            },
        );

        let commands = utils::get_verifier_commands();

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

        let app = app.get_matches_from(command_options);

        match app.subcommand() {
            Some((name, value)) => {
                if let Some(command) = mappings.get(name) {
                    match (*command).execute(value, writer, reader) {
                        Err(e) => {
                            writer
                                .write_err(format!("Error occurred {e}"))
                                .expect("failed to write to stderr");

                            StatusCode::INTERNAL_FAILURE
                        }
                        Ok(code) => code,
                    }
                } else {
                    StatusCode::PREPROCESSOR_ERROR
                }
            }

            None => StatusCode::PREPROCESSOR_ERROR,
        }
    }
}
