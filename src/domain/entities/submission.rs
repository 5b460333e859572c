//! Submission entities - the card document posted to the content server
//! and the lifecycle of one submission.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::FilenameFragment;

/// JSON:API resource type used for every submission
pub const CARD_RESOURCE_TYPE: &str = "card";

/// `{data: {type, attributes, meta: {adoptsFrom: {module, name}}}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDocument {
    pub data: CardResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: Map<String, Value>,
    pub meta: CardMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardMeta {
    #[serde(rename = "adoptsFrom")]
    pub adopts_from: AdoptsFrom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptsFrom {
    pub module: String,
    pub name: String,
}

impl SubmissionDocument {
    /// Build the document for a card whose code lives at `<server_url><fragment>`.
    pub fn new(
        server_url: &str,
        fragment: &FilenameFragment,
        component_name: &str,
        attributes: Map<String, Value>,
    ) -> Self {
        Self {
            data: CardResource {
                resource_type: CARD_RESOURCE_TYPE.to_string(),
                attributes,
                meta: CardMeta {
                    adopts_from: AdoptsFrom {
                        module: module_path(server_url, fragment),
                        name: component_name.to_string(),
                    },
                },
            },
        }
    }

    pub fn module(&self) -> &str {
        &self.data.meta.adopts_from.module
    }

    pub fn component_name(&self) -> &str {
        &self.data.meta.adopts_from.name
    }
}

/// Module URL for a fragment: the server URL with exactly one `/` before the fragment.
pub fn module_path(server_url: &str, fragment: &FilenameFragment) -> String {
    format!("{}/{}", server_url.trim_end_matches('/'), fragment.as_str())
}

/// Status and raw body returned by the content server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerResponse {
    pub status: u16,
    pub body: String,
}

impl ServerResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `data.id` of a JSON:API response, if the body carries one
    pub fn resource_id(&self) -> Option<String> {
        let json: Value = serde_json::from_str(&self.body).ok()?;
        json.get("data")?
            .get("id")?
            .as_str()
            .map(|s| s.to_string())
    }
}

/// Lifecycle of a submission.
///
/// `Built -> Submitted -> {Accepted | Rejected -> Fixed -> Resubmitted -> {Accepted | Rejected}}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Built,
    Submitted,
    Rejected,
    Fixed,
    Resubmitted,
    Accepted,
}

impl SubmissionState {
    /// States a submission can end in
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Accepted | SubmissionState::Rejected)
    }

    /// Whether `next` is a legal successor of `self`
    pub fn can_transition_to(&self, next: SubmissionState) -> bool {
        use SubmissionState::*;
        matches!(
            (self, next),
            (Built, Submitted)
                | (Submitted, Accepted)
                | (Submitted, Rejected)
                | (Rejected, Fixed)
                | (Fixed, Resubmitted)
                | (Resubmitted, Accepted)
                | (Resubmitted, Rejected)
        )
    }
}
