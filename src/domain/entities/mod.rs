//! Domain Entities
//!
//! - `Prompt` - role-tagged messages sent to a model
//! - `Artifact` - generated code, component name, attributes, CSS
//! - `SubmissionDocument` - the card document posted to the content server

mod artifact;
mod prompt;
mod submission;

pub use artifact::Artifact;
pub use prompt::{Message, Prompt, Role};
pub use submission::{
    module_path, AdoptsFrom, CardMeta, CardResource, ServerResponse, SubmissionDocument,
    SubmissionState, CARD_RESOURCE_TYPE,
};
