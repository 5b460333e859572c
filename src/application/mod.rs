//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - one run: code, copy, styles, submission, artifacts
//! - `SubmitUseCase` - save, POST, repair and resubmit within a retry policy
//!
//! ## Services
//!
//! - `CachedRequestClient` - cache-first completion requests
//! - `PromptBuilder` - the four templated model operations

pub mod generate;
pub mod prompts;
pub mod request_client;
pub mod submit;

#[cfg(test)]
pub(crate) mod test_support;

pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use prompts::{parse_attributes, CodeRepair, PromptBuilder};
pub use request_client::{CachedRequestClient, TEMPERATURE};
pub use submit::{SubmitOutcome, SubmitRequest, SubmitUseCase};
