//! ContentServer port - the local server that loads submitted cards

use crate::domain::entities::{ServerResponse, SubmissionDocument};
use crate::error::CardsmithResult;

/// Media type sent in the `Accept` header of every submission
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Endpoint accepting card documents
pub trait ContentServer {
    /// Base URL; module paths are built relative to it
    fn url(&self) -> &str;

    /// POST the document and return whatever status and body came back.
    ///
    /// Only transport failures are errors; any HTTP status is a response.
    fn submit(&self, document: &SubmissionDocument) -> CardsmithResult<ServerResponse>;
}

impl<T: ContentServer + ?Sized> ContentServer for &T {
    fn url(&self) -> &str {
        (**self).url()
    }

    fn submit(&self, document: &SubmissionDocument) -> CardsmithResult<ServerResponse> {
        (**self).submit(document)
    }
}
