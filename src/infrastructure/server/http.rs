//! HTTP Content Server
//!
//! POSTs card documents to the local content server.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::domain::entities::{ServerResponse, SubmissionDocument};
use crate::domain::ports::{ContentServer, JSON_API_MEDIA_TYPE};
use crate::error::{CardsmithError, CardsmithResult};

pub struct HttpContentServer {
    client: Client,
    url: String,
}

impl HttpContentServer {
    pub fn new(url: impl Into<String>, timeout: Duration) -> CardsmithResult<Self> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CardsmithError::Submission {
                url: url.clone(),
                message: format!("cannot build HTTP client: {e}"),
            })?;
        Ok(Self { client, url })
    }
}

impl ContentServer for HttpContentServer {
    fn url(&self) -> &str {
        &self.url
    }

    fn submit(&self, document: &SubmissionDocument) -> CardsmithResult<ServerResponse> {
        let body = serde_json::to_vec(document)?;
        tracing::debug!(url = %self.url, module = document.module(), "submitting card");

        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, JSON_API_MEDIA_TYPE)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| CardsmithError::Submission {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let text = response.text().map_err(|e| CardsmithError::Submission {
            url: self.url.clone(),
            message: format!("failed to read response body: {e}"),
        })?;

        tracing::debug!(status, "content server responded");
        Ok(ServerResponse::new(status, text))
    }
}
