//! Submit Outcome

use std::path::PathBuf;

use crate::domain::entities::{ServerResponse, SubmissionDocument, SubmissionState};

/// Result of a submission, accepted or finally rejected
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub accepted: bool,
    /// Number of POSTs made
    pub attempts: u32,
    /// States visited, starting at `Built`
    pub states: Vec<SubmissionState>,
    pub document: SubmissionDocument,
    /// Last response received
    pub response: ServerResponse,
    /// Code as last submitted
    pub final_code: String,
    /// Card file in the cards folder
    pub card_path: PathBuf,
    /// Repaired revisions written to the run folder
    pub revisions: Vec<PathBuf>,
}

impl SubmitOutcome {
    pub fn fix_count(&self) -> u32 {
        self.attempts.saturating_sub(1)
    }

    pub fn final_state(&self) -> Option<SubmissionState> {
        self.states.last().copied()
    }

    /// `data.id` of an accepted card
    pub fn resource_id(&self) -> Option<String> {
        if self.accepted {
            self.response.resource_id()
        } else {
            None
        }
    }
}
