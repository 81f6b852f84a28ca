use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::reports::files::read_path_content;
use crate::reports::Result;

pub const DEFAULT_RESULTS_DIR: &str = "auxiliary/tempfolder/test-results";

const DEVICE_JSON_REPORT: &str = "iphone_se_ios_103.json";
const DEVICE_JUNIT_REPORT: &str = "iphone_se_ios_103.xml";
const COMBINED_TRACE: &str = "trace.combined.json";
const COMBINED_JUNIT_REPORT: &str = "junit.combined.xml";
const PLUGIN_OUTPUT: &str = "test_plugin_output.json";

const ALWAYS_FAILS: &str = "testAlwaysFails";
const PASSING_TESTS: [&str; 4] = [
    "testAlwaysSuccess",
    "testQuickTest",
    "testSlowTest",
    "testWritingToTestWorkingDir",
];

/// What the checks expect to find in a results directory.
///
/// Every field falls back to the expectations for the reference run, so an
/// expectations file only needs to name what differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Expectations {
    /// Reports that must exist, relative to the results directory.
    pub reports: Vec<String>,
    pub junit: JunitExpectations,
    pub plugin_output: PluginOutputExpectations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JunitExpectations {
    pub report: String,
    pub case_count: usize,
    pub successful: BTreeSet<String>,
    pub failed: BTreeSet<String>,
}

/// Name lists are compared sorted and without collapsing duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginOutputExpectations {
    pub report: String,
    pub test_entries: Vec<String>,
    pub passing_runs: Vec<String>,
    pub failing_runs: Vec<String>,
    pub tear_down_events: usize,
    pub unknown_events: usize,
}

impl Default for Expectations {
    fn default() -> Self {
        Expectations {
            reports: [
                DEVICE_JSON_REPORT,
                DEVICE_JUNIT_REPORT,
                COMBINED_TRACE,
                COMBINED_JUNIT_REPORT,
            ]
            .iter()
            .map(|report| report.to_string())
            .collect(),
            junit: JunitExpectations::default(),
            plugin_output: PluginOutputExpectations::default(),
        }
    }
}

impl Default for JunitExpectations {
    fn default() -> Self {
        JunitExpectations {
            report: DEVICE_JUNIT_REPORT.to_string(),
            case_count: PASSING_TESTS.len() + 1,
            successful: PASSING_TESTS.iter().map(|name| name.to_string()).collect(),
            failed: BTreeSet::from([ALWAYS_FAILS.to_string()]),
        }
    }
}

impl Default for PluginOutputExpectations {
    fn default() -> Self {
        let passing_runs = names(&PASSING_TESTS);
        let mut test_entries = passing_runs.clone();
        test_entries.push(ALWAYS_FAILS.to_string());

        PluginOutputExpectations {
            report: PLUGIN_OUTPUT.to_string(),
            test_entries,
            passing_runs,
            // the reference run retries the failing test once
            failing_runs: names(&[ALWAYS_FAILS, ALWAYS_FAILS]),
            tear_down_events: 1,
            unknown_events: 0,
        }
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

impl Expectations {
    /// Reads YAML, or JSON, overrides on top of the defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Expectations::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = read_path_content(path.as_ref())?;
        log::info!("using expectations from {}", path.as_ref().display());
        Expectations::parse(&content)
    }
}
