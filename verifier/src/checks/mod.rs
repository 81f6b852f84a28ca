pub mod expectations;
pub mod files;
pub mod junit;
pub mod plugin_output;

use std::path::Path;
use std::time::Instant;

use crate::checks::expectations::Expectations;
use crate::reports::errors::Error;
use crate::reports::Result;

pub const REPORTS_EXIST: &str = "reports_exist";
pub const JUNIT_CONTENTS: &str = "junit_contents";
pub const PLUGIN_OUTPUT: &str = "plugin_output";

/// Everything a check reads from.
pub struct CheckContext<'check> {
    pub results_dir: &'check Path,
    pub expectations: &'check Expectations,
}

pub type CheckFn = fn(&CheckContext<'_>) -> Result<()>;

#[derive(Debug)]
pub struct Check {
    pub name: &'static str,
    pub description: &'static str,
    /// Checks after a guard are skipped unless the guard passes.
    pub guard: bool,
    pub run: CheckFn,
}

pub const CHECKS: &[Check] = &[
    Check {
        name: REPORTS_EXIST,
        description: "every expected report exists in the results directory",
        guard: true,
        run: files::reports_exist,
    },
    Check {
        name: JUNIT_CONTENTS,
        description: "the device JUnit report has the expected passing and failing test cases",
        guard: false,
        run: junit::junit_contents,
    },
    Check {
        name: PLUGIN_OUTPUT,
        description: "the plugin event log has the expected testing results and tear down",
        guard: false,
        run: plugin_output::plugin_output,
    },
];

#[derive(Debug)]
pub enum CheckStatus {
    Pass,
    Fail(Error),
    Error(Error),
    Skip(String),
}

impl CheckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail(_) => "fail",
            CheckStatus::Error(_) => "error",
            CheckStatus::Skip(_) => "skip",
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            CheckStatus::Pass => None,
            CheckStatus::Fail(err) | CheckStatus::Error(err) => Some(err.to_string()),
            CheckStatus::Skip(reason) => Some(reason.clone()),
        }
    }
}

impl From<Result<()>> for CheckStatus {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => CheckStatus::Pass,
            Err(err) if err.is_failure() => CheckStatus::Fail(err),
            Err(err) => CheckStatus::Error(err),
        }
    }
}

#[derive(Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub status: CheckStatus,
    /// milliseconds
    pub duration: u128,
}

/// Picks checks by name, keeping table order. No names selects every check.
pub fn select_checks(names: &[String]) -> Result<Vec<&'static Check>> {
    if let Some(unknown) = names
        .iter()
        .find(|name| !CHECKS.iter().any(|check| check.name == name.as_str()))
    {
        let available = CHECKS
            .iter()
            .map(|check| check.name)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::IllegalArguments(format!(
            "unknown check `{unknown}`, available checks are {available}"
        )));
    }

    Ok(CHECKS
        .iter()
        .filter(|check| names.is_empty() || names.iter().any(|name| name == check.name))
        .collect())
}

pub fn run_checks(checks: &[&Check], context: &CheckContext<'_>) -> Vec<CheckOutcome> {
    let mut outcomes = Vec::with_capacity(checks.len());
    let mut failed_guard = None;

    for check in checks {
        if let Some(guard) = failed_guard {
            log::info!("skipping check `{}`", check.name);
            outcomes.push(CheckOutcome {
                name: check.name,
                status: CheckStatus::Skip(format!("`{guard}` did not pass")),
                duration: 0,
            });
            continue;
        }

        log::info!("running check `{}`: {}", check.name, check.description);
        let now = Instant::now();
        let status = CheckStatus::from((check.run)(context));
        let duration = now.elapsed().as_millis();

        match &status {
            CheckStatus::Pass => log::info!("check `{}` passed", check.name),
            CheckStatus::Fail(err) => log::error!("check `{}` failed: {err}", check.name),
            CheckStatus::Error(err) => log::error!("check `{}` errored: {err}", check.name),
            CheckStatus::Skip(_) => {}
        }

        if check.guard && !matches!(status, CheckStatus::Pass) {
            failed_guard = Some(check.name);
        }

        outcomes.push(CheckOutcome {
            name: check.name,
            status,
            duration,
        });
    }

    outcomes
}
