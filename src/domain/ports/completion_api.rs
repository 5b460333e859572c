//! CompletionApi port - the hosted language model
//!
//! One call per cache miss. The request carries the full message list, the
//! output token budget and the sampling temperature; the response is the
//! single text completion.

use crate::domain::entities::Message;
use crate::error::CardsmithResult;

/// A single chat completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Remote completion endpoint
pub trait CompletionApi {
    /// Return the text of the first choice.
    ///
    /// Transport and API errors are returned as `CardsmithError::Completion`.
    fn complete(&self, request: &CompletionRequest<'_>) -> CardsmithResult<String>;
}

impl<T: CompletionApi + ?Sized> CompletionApi for &T {
    fn complete(&self, request: &CompletionRequest<'_>) -> CardsmithResult<String> {
        (**self).complete(request)
    }
}
