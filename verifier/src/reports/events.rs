use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::reports::errors::Error;
use crate::reports::files::read_path_content;
use crate::reports::Result;

pub const DID_OBTAIN_TESTING_RESULT: &str = "didObtainTestingResult";
pub const TEAR_DOWN: &str = "tearDown";

const EVENT_TYPE: &str = "eventType";
const TESTING_RESULT: &str = "testingResult";

pub type EventObject = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestEntry {
    pub method_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub test_entries: Vec<TestEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRun {
    pub succeeded: bool,
    pub test_entry: TestEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestingResult {
    pub bucket: Bucket,
    pub unfiltered_test_runs: Vec<TestRun>,
}

/// Plugin events partitioned by their `eventType`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBuckets {
    pub results: Vec<TestingResult>,
    pub tear_downs: Vec<EventObject>,
    pub unknown: Vec<EventObject>,
}

impl EventBuckets {
    fn accept(&mut self, index: usize, event: Value) -> Result<()> {
        let mut event = match event {
            Value::Object(event) => event,
            other => {
                return Err(Error::MalformedDocument(format!(
                    "event #{index} is not an object: {other}"
                )))
            }
        };

        let event_type = match event.get(EVENT_TYPE) {
            Some(Value::String(event_type)) => event_type.clone(),
            _ => {
                return Err(Error::MalformedDocument(format!(
                    "event #{index} has no string `{EVENT_TYPE}`"
                )))
            }
        };

        log::trace!("event #{index} is `{event_type}`");
        match event_type.as_str() {
            DID_OBTAIN_TESTING_RESULT => {
                let result = event.remove(TESTING_RESULT).ok_or_else(|| {
                    Error::MalformedDocument(format!(
                        "event #{index} of type `{DID_OBTAIN_TESTING_RESULT}` has no `{TESTING_RESULT}`"
                    ))
                })?;
                self.results.push(serde_json::from_value(result)?);
            }
            TEAR_DOWN => self.tear_downs.push(event),
            _ => self.unknown.push(event),
        }

        Ok(())
    }

    /// Every `testEntries[*].methodName` across the result events, sorted, duplicates kept.
    pub fn test_entry_names(&self) -> Vec<String> {
        let mut names = self
            .results
            .iter()
            .flat_map(|result| result.bucket.test_entries.iter())
            .map(|entry| entry.method_name.clone())
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    /// Sorted passing and failing `unfilteredTestRuns` method names, duplicates kept.
    pub fn run_names(&self) -> (Vec<String>, Vec<String>) {
        let (mut passing, mut failing) = self
            .results
            .iter()
            .flat_map(|result| result.unfiltered_test_runs.iter())
            .fold((vec![], vec![]), |(mut passing, mut failing), run| {
                let name = run.test_entry.method_name.clone();
                if run.succeeded {
                    passing.push(name);
                } else {
                    failing.push(name);
                }
                (passing, failing)
            });

        passing.sort();
        failing.sort();
        (passing, failing)
    }

    /// `eventType` of each unknown event, in document order.
    pub fn unknown_event_types(&self) -> Vec<String> {
        self.unknown
            .iter()
            .filter_map(|event| event.get(EVENT_TYPE).and_then(Value::as_str))
            .map(String::from)
            .collect()
    }
}

pub fn classify_events(events: Vec<Value>) -> Result<EventBuckets> {
    let mut buckets = EventBuckets::default();
    for (index, event) in events.into_iter().enumerate() {
        buckets.accept(index, event)?;
    }

    log::debug!(
        "classified events: {} testing results, {} tear downs, {} unknown",
        buckets.results.len(),
        buckets.tear_downs.len(),
        buckets.unknown.len()
    );
    Ok(buckets)
}

pub fn classify_events_from_str(content: &str) -> Result<EventBuckets> {
    let events: Vec<Value> = serde_json::from_str(content)?;
    classify_events(events)
}

pub fn classify_events_from_file<P: AsRef<Path>>(path: P) -> Result<EventBuckets> {
    let content = read_path_content(path.as_ref())?;
    classify_events_from_str(&content)
}

/// Flattened view of a plugin event log, printed by the `events` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    pub testing_result_events: usize,
    pub tear_down_events: usize,
    pub unknown_events: Vec<String>,
    pub test_entries: Vec<String>,
    pub passing_runs: Vec<String>,
    pub failing_runs: Vec<String>,
}

impl From<&EventBuckets> for EventSummary {
    fn from(buckets: &EventBuckets) -> Self {
        let (passing_runs, failing_runs) = buckets.run_names();
        EventSummary {
            testing_result_events: buckets.results.len(),
            tear_down_events: buckets.tear_downs.len(),
            unknown_events: buckets.unknown_event_types(),
            test_entries: buckets.test_entry_names(),
            passing_runs,
            failing_runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const EVENTS: &str = indoc! {r#"
        [
            {
                "eventType": "didObtainTestingResult",
                "testingResult": {
                    "bucket": {
                        "testEntries": [
                            { "className": "SmokeTests", "methodName": "testB" },
                            { "className": "SmokeTests", "methodName": "testA" }
                        ]
                    },
                    "unfilteredTestRuns": [
                        { "succeeded": false, "testEntry": { "methodName": "testB" } },
                        { "succeeded": true, "testEntry": { "methodName": "testA" } },
                        { "succeeded": false, "testEntry": { "methodName": "testB" } }
                    ]
                }
            },
            { "eventType": "willRunTests" },
            { "eventType": "tearDown" }
        ]
    "#};

    #[test]
    fn events_partition_into_buckets() {
        let buckets = classify_events_from_str(EVENTS).unwrap();
        assert_eq!(buckets.results.len(), 1);
        assert_eq!(buckets.tear_downs.len(), 1);
        assert_eq!(buckets.unknown_event_types(), vec!["willRunTests"]);
    }

    #[test]
    fn run_names_keep_duplicates() {
        let buckets = classify_events_from_str(EVENTS).unwrap();
        assert_eq!(buckets.test_entry_names(), vec!["testA", "testB"]);
        assert_eq!(
            buckets.run_names(),
            (
                vec![String::from("testA")],
                vec![String::from("testB"), String::from("testB")]
            )
        );
    }

    #[test]
    fn summary_flattens_buckets() {
        let buckets = classify_events_from_str(EVENTS).unwrap();
        let summary = EventSummary::from(&buckets);
        assert_eq!(summary.testing_result_events, 1);
        assert_eq!(summary.tear_down_events, 1);
        assert_eq!(summary.failing_runs, vec!["testB", "testB"]);
    }

    #[test]
    fn event_type_matches_literally() {
        let buckets =
            classify_events_from_str(r#"[{"eventType": "TearDown"}, {"eventType": "teardown"}]"#)
                .unwrap();
        assert!(buckets.tear_downs.is_empty());
        assert_eq!(buckets.unknown.len(), 2);
    }

    #[test]
    fn empty_log_has_empty_buckets() {
        let buckets = classify_events_from_str("[]").unwrap();
        assert_eq!(buckets, EventBuckets::default());
    }

    #[rstest]
    #[case(r#"[1]"#)]
    #[case(r#"[{"eventType": 42}]"#)]
    #[case(r#"[{"testingResult": {}}]"#)]
    #[case(r#"[{"eventType": "didObtainTestingResult"}]"#)]
    fn malformed_events_are_rejected(#[case] content: &str) {
        assert!(matches!(
            classify_events_from_str(content),
            Err(Error::MalformedDocument(_))
        ));
    }

    #[rstest]
    #[case(r#"{"eventType": "tearDown"}"#)]
    #[case(r#"[{"eventType": "tearDown"}"#)]
    #[case(r#"[{"eventType": "didObtainTestingResult", "testingResult": {"bucket": {}}}]"#)]
    fn invalid_json_is_a_json_error(#[case] content: &str) {
        assert!(matches!(
            classify_events_from_str(content),
            Err(Error::JsonError(_))
        ));
    }
}
