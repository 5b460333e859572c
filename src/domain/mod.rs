//! Domain Layer
//!
//! Pure logic of the card pipeline, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Prompt, Artifact, SubmissionDocument
//! - `value_objects/` - CacheKey, ModelTable, RetryPolicy, FilenameFragment
//! - `services/` - fence stripping, export extraction, prompt templates
//! - `ports/` - interfaces implemented by the infrastructure layer

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
