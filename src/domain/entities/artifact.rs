//! Artifact entity - what one generation run produces

use serde_json::{Map, Value};

/// Generated card: code, its component name, copy for its fields, optional CSS.
///
/// The code is an opaque string; nothing here validates it against the
/// template language.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    code: String,
    component_name: String,
    attributes: Map<String, Value>,
    css: Option<String>,
}

impl Artifact {
    pub fn new(
        code: impl Into<String>,
        component_name: impl Into<String>,
        attributes: Map<String, Value>,
    ) -> Self {
        Self {
            code: code.into(),
            component_name: component_name.into(),
            attributes,
            css: None,
        }
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn css(&self) -> Option<&str> {
        self.css.as_deref()
    }

    /// Replace the code after a repair, keeping everything else
    pub fn replace_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }
}
