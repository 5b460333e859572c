//! Cardsmith - prompt-chaining card generator
//!
//! Cardsmith turns a short description into a card: it prompts a language
//! model for template code, field copy and styles, caches every answer on
//! disk, and submits the result to a local content server, asking the model
//! to repair the code when the server rejects it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CachedRequestClient, GenerateOptions, GenerateResult, GenerateUseCase, PromptBuilder,
    SubmitOutcome, SubmitUseCase,
};
pub use config::Config;
pub use domain::services::{extract_component_name, strip_code_fence};
pub use error::{CardsmithError, CardsmithResult};
