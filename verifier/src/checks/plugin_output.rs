use crate::checks::expectations::PluginOutputExpectations;
use crate::checks::CheckContext;
use crate::reports::errors::{assert_equal, Error};
use crate::reports::events::{classify_events_from_file, EventBuckets};
use crate::reports::Result;

pub(crate) fn plugin_output(context: &CheckContext<'_>) -> Result<()> {
    let expectations = &context.expectations.plugin_output;
    let buckets = classify_events_from_file(context.results_dir.join(&expectations.report))?;

    check_test_result_events(&buckets, expectations)?;
    check_tear_down_events(&buckets, expectations)?;
    check_unknown_events(&buckets, expectations)
}

fn sorted(names: &[String]) -> Vec<String> {
    let mut names = names.to_vec();
    names.sort();
    names
}

pub fn check_test_result_events(
    buckets: &EventBuckets,
    expectations: &PluginOutputExpectations,
) -> Result<()> {
    assert_equal(
        "test entries of testing result events",
        &sorted(&expectations.test_entries),
        &buckets.test_entry_names(),
    )?;

    let (passing, failing) = buckets.run_names();
    assert_equal(
        "passing test runs",
        &sorted(&expectations.passing_runs),
        &passing,
    )?;
    assert_equal(
        "failing test runs",
        &sorted(&expectations.failing_runs),
        &failing,
    )
}

pub fn check_tear_down_events(
    buckets: &EventBuckets,
    expectations: &PluginOutputExpectations,
) -> Result<()> {
    assert_equal(
        "number of tear down events",
        &expectations.tear_down_events,
        &buckets.tear_downs.len(),
    )
}

pub fn check_unknown_events(
    buckets: &EventBuckets,
    expectations: &PluginOutputExpectations,
) -> Result<()> {
    if buckets.unknown.len() == expectations.unknown_events {
        return Ok(());
    }

    Err(Error::Mismatch {
        subject: String::from("number of unknown events"),
        expected: expectations.unknown_events.to_string(),
        actual: format!(
            "{} {:?}",
            buckets.unknown.len(),
            buckets.unknown_event_types()
        ),
    })
}
