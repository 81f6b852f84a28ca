// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub(crate) mod utils;

#[cfg(test)]
mod junit_cases_tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use run_results_verifier::checks::junit::partition_case_names;
    use run_results_verifier::commands::{FILE, JUNIT_CASES, PRINT_JSON};
    use run_results_verifier::reports::junit::{get_test_cases_from_xml_file, read_test_cases};

    use crate::utils::{
        buffer_writer, get_full_path_for_resource_file, get_reader, read_from_resource_file,
        string_reader, CommandTestRunner, StatusCode,
    };

    const DEVICE_REPORT: &str = "resources/test-results/iphone_se_ios_103.xml";

    #[derive(Default)]
    struct JunitCasesTestRunner<'args> {
        file: Option<&'args str>,
        print_json: bool,
    }

    impl<'args> JunitCasesTestRunner<'args> {
        fn file(&'args mut self, arg: &'args str) -> &'args mut JunitCasesTestRunner {
            self.file = Some(arg);
            self
        }

        fn print_json(&'args mut self, arg: bool) -> &'args mut JunitCasesTestRunner {
            self.print_json = arg;
            self
        }
    }

    impl<'args> CommandTestRunner for JunitCasesTestRunner<'args> {
        fn build_args(&self) -> Vec<String> {
            let mut args = vec![String::from(JUNIT_CASES)];

            if let Some(file) = self.file {
                args.push(format!("-{}", FILE.1));
                args.push(get_full_path_for_resource_file(file));
            }

            if self.print_json {
                args.push(format!("--{}", PRINT_JSON.0));
            }

            args
        }
    }

    #[test]
    fn device_report_has_five_cases_with_one_failure() {
        let records = get_test_cases_from_xml_file(get_full_path_for_resource_file(DEVICE_REPORT))
            .unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records.iter().filter(|record| record.is_failed()).count(), 1);

        let (successful, failed) = partition_case_names(&records).unwrap();
        assert_eq!(
            successful,
            BTreeSet::from([
                String::from("testSlowTest"),
                String::from("testAlwaysSuccess"),
                String::from("testQuickTest"),
                String::from("testWritingToTestWorkingDir"),
            ])
        );
        assert_eq!(failed, BTreeSet::from([String::from("testAlwaysFails")]));
    }

    #[rstest]
    #[case(DEVICE_REPORT)]
    #[case("resources/test-results/junit.combined.xml")]
    fn skipped_and_returned_cases_cover_every_testcase(#[case] report: &str) {
        let content = read_from_resource_file(report);
        let cases = read_test_cases(&content).unwrap();
        assert_eq!(
            cases.records.len() + cases.skipped,
            content.matches("<testcase ").count()
        );
    }

    #[test]
    fn json_output_flattens_failure() {
        let mut writer = buffer_writer();
        let status_code = JunitCasesTestRunner::default()
            .file(DEVICE_REPORT)
            .print_json(true)
            .run(&mut writer, &mut string_reader(""));

        assert_eq!(status_code, StatusCode::SUCCESS);
        let records: serde_json::Value =
            serde_json::from_str(&writer.into_string().unwrap()).unwrap();
        let records = records.as_array().unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(
            records[3],
            serde_json::json!({
                "classname": "FunctionalTests",
                "name": "testAlwaysFails",
                "time": "0.018",
                "failure": {
                    "message": "XCTAssertTrue failed - always fails",
                    "type": "Failure"
                }
            })
        );
    }

    #[test]
    fn yaml_output_reads_from_stdin() {
        let mut writer = buffer_writer();
        let status_code =
            JunitCasesTestRunner::default().run(&mut writer, &mut get_reader(DEVICE_REPORT));

        assert_eq!(status_code, StatusCode::SUCCESS);
        let records: serde_yaml::Value =
            serde_yaml::from_str(&writer.into_string().unwrap()).unwrap();
        let names = records
            .as_sequence()
            .unwrap()
            .iter()
            .map(|record| record["name"].as_str().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "testAlwaysSuccess",
                "testWritingToTestWorkingDir",
                "testSlowTest",
                "testAlwaysFails",
                "testQuickTest"
            ]
        );
    }

    #[test]
    fn empty_stdin_asks_for_input() {
        let mut writer = buffer_writer();
        let status_code = JunitCasesTestRunner::default().run(&mut writer, &mut string_reader(""));

        assert_eq!(status_code, StatusCode::INTERNAL_FAILURE);
        assert!(writer.err_to_string().unwrap().contains("no input"));
    }

    #[test]
    fn malformed_report_is_an_error() {
        let mut writer = buffer_writer();
        let status_code = JunitCasesTestRunner::default()
            .file("resources/malformed/iphone_se_ios_103.xml")
            .run(&mut writer, &mut string_reader(""));

        assert_eq!(status_code, StatusCode::INTERNAL_FAILURE);
        assert!(writer
            .err_to_string()
            .unwrap()
            .starts_with("Error occurred Error parsing XML document"));
    }

    #[test]
    fn rereading_gives_identical_records() {
        let path = get_full_path_for_resource_file(DEVICE_REPORT);
        assert_eq!(
            get_test_cases_from_xml_file(&path).unwrap(),
            get_test_cases_from_xml_file(&path).unwrap()
        );
    }
}
