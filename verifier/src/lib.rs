// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod checks;
pub mod command;
pub mod commands;
pub mod reports;
pub mod utils;

pub use crate::checks::expectations::Expectations;
pub use crate::reports::errors::Error;

use std::path::Path;

use crate::checks::{run_checks, select_checks, CheckContext, CheckOutcome};

/// Runs every registered check against `results_dir`.
pub fn verify_results(
    results_dir: &Path,
    expectations: &Expectations,
) -> reports::Result<Vec<CheckOutcome>> {
    let checks = select_checks(&[])?;
    let context = CheckContext {
        results_dir,
        expectations,
    };
    Ok(run_checks(&checks, &context))
}
