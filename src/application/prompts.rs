//! Prompt Builder
//!
//! The four model-backed operations of a run. Each reads the example card
//! fresh through the file system port, fills a template from
//! `domain::services::templates`, and sends it through the cached client.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::ports::{CompletionApi, FileSystem, ResponseCache};
use crate::domain::services::templates;
use crate::error::{CardsmithError, CardsmithResult};

use super::request_client::CachedRequestClient;

/// Produces repaired code from a server error
///
/// The submission use case only needs this one operation, so tests can
/// count repair calls without a model behind them.
pub trait CodeRepair {
    fn repair(&self, description: &str, code: &str, error: &str) -> CardsmithResult<String>;
}

pub struct PromptBuilder<FS, C, A>
where
    FS: FileSystem,
    C: ResponseCache,
    A: CompletionApi,
{
    fs: FS,
    client: CachedRequestClient<C, A>,
    example_path: PathBuf,
    model: String,
    system: Option<String>,
}

impl<FS, C, A> PromptBuilder<FS, C, A>
where
    FS: FileSystem,
    C: ResponseCache,
    A: CompletionApi,
{
    pub fn new(
        fs: FS,
        client: CachedRequestClient<C, A>,
        example_path: impl Into<PathBuf>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            fs,
            client,
            example_path: example_path.into(),
            model: model.into(),
            system: None,
        }
    }

    /// System instruction sent ahead of every prompt; blank means none
    pub fn with_system(mut self, system: Option<String>) -> Self {
        self.system = system.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn example_path(&self) -> &Path {
        &self.example_path
    }

    pub fn client(&self) -> &CachedRequestClient<C, A> {
        &self.client
    }

    fn example(&self) -> CardsmithResult<String> {
        Ok(self.fs.read(&self.example_path)?)
    }

    fn send(&self, prompt: &str) -> CardsmithResult<String> {
        self.client
            .request(&self.model, self.system.as_deref(), prompt)
    }

    /// First draft of the card template
    pub fn generate_code(&self, description: &str) -> CardsmithResult<String> {
        let example = self.example()?;
        self.send(&templates::code_prompt(&example, description))
    }

    /// Repaired code for a server error
    pub fn fix(&self, description: &str, code: &str, error: &str) -> CardsmithResult<String> {
        let example = self.example()?;
        self.send(&templates::fix_prompt(&example, description, code, error))
    }

    /// Stylesheet for the card
    pub fn css(&self, description: &str, code: &str, style: &str) -> CardsmithResult<String> {
        let example = self.example()?;
        self.send(&templates::css_prompt(&example, description, code, style))
    }

    /// Field copy as a JSON object of attributes
    pub fn generate_json(
        &self,
        description: &str,
        code: &str,
        use_case: &str,
    ) -> CardsmithResult<Map<String, Value>> {
        let example = self.example()?;
        let text = self.send(&templates::json_prompt(
            &example,
            description,
            code,
            use_case,
        ))?;
        parse_attributes(&text)
    }
}

impl<FS, C, A> CodeRepair for PromptBuilder<FS, C, A>
where
    FS: FileSystem,
    C: ResponseCache,
    A: CompletionApi,
{
    fn repair(&self, description: &str, code: &str, error: &str) -> CardsmithResult<String> {
        self.fix(description, code, error)
    }
}

/// Parse model output as a JSON object
pub fn parse_attributes(text: &str) -> CardsmithResult<Map<String, Value>> {
    let value: Value = serde_json::from_str(text.trim()).map_err(|e| CardsmithError::InvalidJson {
        message: e.to_string(),
        raw: text.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Array(_) => Err(CardsmithError::NotAnObject { kind: "array" }),
        Value::String(_) => Err(CardsmithError::NotAnObject { kind: "string" }),
        Value::Number(_) => Err(CardsmithError::NotAnObject { kind: "number" }),
        Value::Bool(_) => Err(CardsmithError::NotAnObject { kind: "boolean" }),
        Value::Null => Err(CardsmithError::NotAnObject { kind: "null" }),
    }
}
