//! Completion API implementations

mod openai;

pub use openai::OpenAiClient;
