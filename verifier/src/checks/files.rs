use crate::checks::CheckContext;
use crate::reports::files::check_file_exists;
use crate::reports::Result;

pub(crate) fn reports_exist(context: &CheckContext<'_>) -> Result<()> {
    for report in &context.expectations.reports {
        check_file_exists(context.results_dir.join(report))?;
    }
    Ok(())
}
