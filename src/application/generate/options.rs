//! Generate Options

/// Inputs for one generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub description: String,
    pub use_case: String,
    /// Style description; the CSS stage runs only when present
    pub style: Option<String>,
    /// Filename fragment; derived from the component name when absent
    pub fragment: Option<String>,
    /// POST to the content server after generating
    pub submit: bool,
}

impl GenerateOptions {
    pub fn new(description: impl Into<String>, use_case: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            use_case: use_case.into(),
            style: None,
            fragment: None,
            submit: true,
        }
    }

    pub fn with_style(mut self, style: Option<String>) -> Self {
        self.style = style.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_fragment(mut self, fragment: Option<String>) -> Self {
        self.fragment = fragment.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_submit(mut self, submit: bool) -> Self {
        self.submit = submit;
        self
    }
}
