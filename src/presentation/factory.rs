//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::time::Duration;

use crate::application::{CachedRequestClient, GenerateUseCase, PromptBuilder, SubmitUseCase};
use crate::config::Config;
use crate::error::CardsmithResult;
use crate::infrastructure::{DiskCache, HttpContentServer, LocalFs, OpenAiClient};

/// Type alias for the concrete request client
pub type ConcreteRequestClient = CachedRequestClient<DiskCache, OpenAiClient>;

/// Type alias for the concrete prompt builder
pub type ConcretePromptBuilder = PromptBuilder<LocalFs, DiskCache, OpenAiClient>;

/// Type alias for the concrete SubmitUseCase
pub type ConcreteSubmitUseCase = SubmitUseCase<HttpContentServer, LocalFs>;

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase =
    GenerateUseCase<LocalFs, DiskCache, OpenAiClient, HttpContentServer>;

fn timeout(config: &Config) -> Duration {
    Duration::from_secs(config.http.timeout_secs.max(1))
}

/// Response cache at `paths.cache_dir`
pub fn create_cache(config: &Config) -> DiskCache {
    DiskCache::new(&config.paths.cache_dir)
}

/// Cache-first client for the configured completion endpoint
pub fn create_request_client(config: &Config) -> CardsmithResult<ConcreteRequestClient> {
    let api = OpenAiClient::new(&config.llm.base_url, timeout(config))?
        .with_api_key_from_env(&config.llm.api_key_env);
    Ok(CachedRequestClient::new(
        create_cache(config),
        api,
        config.model_table(),
    ))
}

/// Prompt builder using `llm.model` and the configured example card
pub fn create_prompt_builder(config: &Config) -> CardsmithResult<ConcretePromptBuilder> {
    Ok(PromptBuilder::new(
        LocalFs::new(),
        create_request_client(config)?,
        &config.paths.example,
        &config.llm.model,
    )
    .with_system(config.system_prompt().map(str::to_string)))
}

/// Submission against `server.url` with the configured retry policy
pub fn create_submit_use_case(config: &Config) -> CardsmithResult<ConcreteSubmitUseCase> {
    let server = HttpContentServer::new(&config.server.url, timeout(config))?;
    Ok(SubmitUseCase::new(server, LocalFs::new(), &config.paths.cards_dir)
        .with_policy(config.retry)
        .with_success_status(config.server.success_status))
}

/// Create a generate use case with all dependencies wired up
pub fn create_generate_use_case(config: &Config) -> CardsmithResult<ConcreteGenerateUseCase> {
    Ok(GenerateUseCase::new(
        create_prompt_builder(config)?,
        create_submit_use_case(config)?,
        LocalFs::new(),
        &config.paths.runs_dir,
    ))
}
