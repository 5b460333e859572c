//! Cached Request Client
//!
//! Deduplicates identical (model, messages) requests against a persistent
//! cache, calls the completion API only on a miss, and strips code-fence
//! wrappers from whatever text comes back.

use crate::domain::entities::Prompt;
use crate::domain::ports::{CompletionApi, CompletionRequest, ResponseCache};
use crate::domain::services::strip_code_fence;
use crate::domain::value_objects::{CacheKey, ModelTable};
use crate::error::CardsmithResult;

/// Sampling temperature for every request
pub const TEMPERATURE: f32 = 0.0;

pub struct CachedRequestClient<C, A>
where
    C: ResponseCache,
    A: CompletionApi,
{
    cache: C,
    api: A,
    models: ModelTable,
}

impl<C, A> CachedRequestClient<C, A>
where
    C: ResponseCache,
    A: CompletionApi,
{
    pub fn new(cache: C, api: A, models: ModelTable) -> Self {
        Self { cache, api, models }
    }

    pub fn models(&self) -> &ModelTable {
        &self.models
    }

    /// Send one prompt and return the (fence-stripped) completion text.
    ///
    /// The raw response is cached before post-processing, so a later change
    /// to fence handling applies to cached answers too.
    pub fn request(
        &self,
        model: &str,
        system: Option<&str>,
        user_prompt: &str,
    ) -> CardsmithResult<String> {
        let prompt = Prompt::new(system, user_prompt);
        let key = CacheKey::new(model, &prompt);

        if let Some(raw) = self.cache.get(&key)? {
            tracing::debug!(model, key = %key.digest(), "cache hit");
            return Ok(strip_code_fence(&raw).to_string());
        }

        let max_tokens = self.models.max_output_tokens(model)?;
        tracing::info!(model, max_tokens, key = %key.digest(), "cache miss, calling completion API");

        let raw = self.api.complete(&CompletionRequest {
            model,
            messages: prompt.messages(),
            max_tokens,
            temperature: TEMPERATURE,
        })?;

        self.cache.put(&key, &raw)?;
        Ok(strip_code_fence(&raw).to_string())
    }
}
