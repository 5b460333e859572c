//! Model table - known context lengths per model identifier
//!
//! The output token budget for a request is the model's context length minus
//! a fixed reserve for the example content embedded in every prompt.

use std::collections::BTreeMap;

use crate::error::{CardsmithError, CardsmithResult};

/// Tokens reserved for the example card embedded in prompts
pub const DEFAULT_RESERVED_EXAMPLE_TOKENS: u32 = 2500;

const BUILTIN_MODELS: &[(&str, u32)] = &[
    ("gpt-3.5-turbo", 4096),
    ("gpt-3.5-turbo-16k", 16384),
    ("gpt-4", 8192),
    ("gpt-4-32k", 32768),
    ("gpt-4o", 128000),
];

/// Context lengths keyed by model identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTable {
    context_lengths: BTreeMap<String, u32>,
    reserved_example_tokens: u32,
}

impl Default for ModelTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ModelTable {
    /// Table with the built-in models and the default reserve
    pub fn builtin() -> Self {
        Self {
            context_lengths: BUILTIN_MODELS
                .iter()
                .map(|(name, len)| (name.to_string(), *len))
                .collect(),
            reserved_example_tokens: DEFAULT_RESERVED_EXAMPLE_TOKENS,
        }
    }

    /// Empty table (no model resolves until one is inserted)
    pub fn empty(reserved_example_tokens: u32) -> Self {
        Self {
            context_lengths: BTreeMap::new(),
            reserved_example_tokens,
        }
    }

    pub fn with_reserved_example_tokens(mut self, reserved: u32) -> Self {
        self.reserved_example_tokens = reserved;
        self
    }

    /// Add or replace one model's context length
    pub fn insert(&mut self, model: impl Into<String>, context_length: u32) {
        self.context_lengths.insert(model.into(), context_length);
    }

    /// Overlay entries from configuration
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        for (model, len) in entries {
            self.insert(model, len);
        }
    }

    pub fn reserved_example_tokens(&self) -> u32 {
        self.reserved_example_tokens
    }

    pub fn context_length(&self, model: &str) -> CardsmithResult<u32> {
        self.context_lengths
            .get(model)
            .copied()
            .ok_or_else(|| CardsmithError::UnknownModel {
                model: model.to_string(),
                known: self.model_names().join(", "),
            })
    }

    /// `context_length(model) - reserved_example_tokens`
    pub fn max_output_tokens(&self, model: &str) -> CardsmithResult<u32> {
        let context_length = self.context_length(model)?;
        match context_length.checked_sub(self.reserved_example_tokens) {
            Some(budget) if budget > 0 => Ok(budget),
            _ => Err(CardsmithError::TokenBudget {
                model: model.to_string(),
                context_length,
                reserved: self.reserved_example_tokens,
            }),
        }
    }

    pub fn contains(&self, model: &str) -> bool {
        self.context_lengths.contains_key(model)
    }

    pub fn model_names(&self) -> Vec<&str> {
        self.context_lengths.keys().map(|s| s.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.context_lengths.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
