//! Cache Key Value Object
//!
//! Identifies one completion request: the model identifier concatenated with
//! the JSON encoding of the message list. Two requests share a key exactly
//! when they would send the same model the same messages.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::domain::entities::Prompt;

/// Cache key for a (model, messages) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Prefix for the digest used as a storage name
    pub const DIGEST_PREFIX: &'static str = "sha256:";

    pub fn new(model: &str, prompt: &Prompt) -> Self {
        Self(format!("{}{}", model, prompt.to_json()))
    }

    /// Full key text (model followed by serialized messages)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// SHA-256 of the key, prefixed with `sha256:`
    pub fn digest(&self) -> String {
        let hash = Sha256::digest(self.0.as_bytes());
        format!("{}{:x}", Self::DIGEST_PREFIX, hash)
    }

    /// Hex part of the digest, safe to use as a file stem
    pub fn file_stem(&self) -> String {
        let hash = Sha256::digest(self.0.as_bytes());
        format!("{:x}", hash)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_concatenates_model_and_messages() {
        let key = CacheKey::new("gpt-4", &Prompt::new(None, "hi"));
        assert_eq!(key.as_str(), r#"gpt-4[{"role":"user","content":"hi"}]"#);
    }

    #[test]
    fn same_request_same_key() {
        let k1 = CacheKey::new("gpt-4", &Prompt::new(Some("s"), "hi"));
        let k2 = CacheKey::new("gpt-4", &Prompt::new(Some("s"), "hi"));
        assert_eq!(k1, k2);
        assert_eq!(k1.file_stem(), k2.file_stem());
    }

    #[test]
    fn model_is_part_of_the_key() {
        let k1 = CacheKey::new("gpt-4", &Prompt::new(None, "hi"));
        let k2 = CacheKey::new("gpt-3.5-turbo", &Prompt::new(None, "hi"));
        assert_ne!(k1, k2);
    }

    #[test]
    fn system_message_is_part_of_the_key() {
        let k1 = CacheKey::new("gpt-4", &Prompt::new(None, "hi"));
        let k2 = CacheKey::new("gpt-4", &Prompt::new(Some("be brief"), "hi"));
        assert_ne!(k1.file_stem(), k2.file_stem());
    }

    #[test]
    fn digest_has_prefix_and_64_hex_chars() {
        let key = CacheKey::new("gpt-4", &Prompt::new(None, "hi"));
        let digest = key.digest();
        assert!(digest.starts_with("sha256:"));
        assert_eq!(digest.len(), 7 + 64);
        assert_eq!(key.file_stem().len(), 64);
    }
}
