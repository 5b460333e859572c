//! Generate Result

use std::path::PathBuf;

use crate::application::submit::SubmitOutcome;
use crate::domain::entities::Artifact;
use crate::domain::value_objects::FilenameFragment;

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub run_dir: PathBuf,
    pub fragment: FilenameFragment,
    /// Final artifact; its code is the last submitted revision
    pub artifact: Artifact,
    /// `None` when the run did not submit
    pub submission: Option<SubmitOutcome>,
    /// Files written in the run folder, in order
    pub files: Vec<PathBuf>,
}

impl GenerateResult {
    /// Accepted, or not submitted at all
    pub fn is_success(&self) -> bool {
        self.submission.as_ref().map_or(true, |s| s.accepted)
    }

    pub fn was_submitted(&self) -> bool {
        self.submission.is_some()
    }

    pub fn fix_count(&self) -> u32 {
        self.submission.as_ref().map_or(0, |s| s.fix_count())
    }
}
