use std::collections::BTreeSet;

use crate::checks::expectations::JunitExpectations;
use crate::checks::CheckContext;
use crate::reports::errors::{assert_equal, Error};
use crate::reports::junit::{get_test_cases_from_xml_file, TestCaseRecord};
use crate::reports::Result;

pub(crate) fn junit_contents(context: &CheckContext<'_>) -> Result<()> {
    let expectations = &context.expectations.junit;
    let records = get_test_cases_from_xml_file(context.results_dir.join(&expectations.report))?;
    check_junit_records(&records, expectations)
}

/// Splits records into successful and failed name sets, failed meaning a `failure` child.
pub fn partition_case_names(
    records: &[TestCaseRecord],
) -> Result<(BTreeSet<String>, BTreeSet<String>)> {
    records.iter().try_fold(
        (BTreeSet::new(), BTreeSet::new()),
        |(mut successful, mut failed), record| -> Result<(BTreeSet<String>, BTreeSet<String>)> {
            let name = record
                .name()
                .ok_or_else(|| {
                    Error::MalformedDocument(format!(
                        "test case without a `name` attribute: {:?}",
                        record.attributes()
                    ))
                })?
                .to_string();

            if record.is_failed() {
                failed.insert(name);
            } else {
                successful.insert(name);
            }
            Ok((successful, failed))
        },
    )
}

pub fn check_junit_records(
    records: &[TestCaseRecord],
    expectations: &JunitExpectations,
) -> Result<()> {
    assert_equal(
        "number of JUnit test cases",
        &expectations.case_count,
        &records.len(),
    )?;

    let (successful, failed) = partition_case_names(records)?;
    assert_equal(
        "successful JUnit test cases",
        &expectations.successful,
        &successful,
    )?;
    assert_equal("failed JUnit test cases", &expectations.failed, &failed)
}
