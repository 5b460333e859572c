//! Submit Request

use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::value_objects::FilenameFragment;

/// Everything one submission needs
#[derive(Debug, Clone, Copy)]
pub struct SubmitRequest<'a> {
    pub fragment: &'a FilenameFragment,
    /// User description, reused in the repair prompt
    pub description: &'a str,
    pub code: &'a str,
    pub attributes: &'a Map<String, Value>,
    /// Run folder for `submission.json`, `response.txt` and the
    /// `v<N>.gts` revision of each repair
    pub run_dir: Option<&'a Path>,
}
