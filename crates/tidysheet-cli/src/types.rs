use std::path::PathBuf;

use tidysheet_model::Summary;

/// What one CLI run produced, for the end-of-run summary.
#[derive(Debug)]
pub struct RunOutcome {
    pub pipeline: &'static str,
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary_json: Option<PathBuf>,
    pub summary: Summary,
}
