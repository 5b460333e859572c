//! Submit Module
//!
//! Saves a card where the content server loads it, posts the card
//! document, and on rejection repairs and resubmits within a retry policy.
//!
//! ## Structure
//!
//! - `request` - Input types (`SubmitRequest`)
//! - `outcome` - Result types (`SubmitOutcome`)
//! - `use_case` - Core use case logic (`SubmitUseCase`)

mod outcome;
mod request;
mod use_case;

pub use outcome::SubmitOutcome;
pub use request::SubmitRequest;
pub use use_case::{SubmitUseCase, RESPONSE_FILE, SUBMISSION_FILE};

#[cfg(test)]
mod tests;
