//! Filename fragment - names the card's code file and its module path
//!
//! The fragment becomes both `<cards_dir>/<fragment>.gts` and
//! `<server_url><fragment>`, so it must be a single, plain path segment.

use std::fmt;

use crate::error::{CardsmithError, CardsmithResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilenameFragment(String);

impl FilenameFragment {
    /// Validate a user-supplied fragment.
    ///
    /// A trailing `.gts` is dropped. Allowed characters: ASCII letters,
    /// digits, `_` and `-`.
    pub fn parse(raw: &str) -> CardsmithResult<Self> {
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_suffix(".gts").unwrap_or(trimmed);

        if trimmed.is_empty() {
            return Err(invalid(raw, "must not be empty"));
        }
        if let Some(c) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(invalid(
                raw,
                &format!("character '{}' is not allowed (use letters, digits, '_' or '-')", c),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Derive a fragment from a component name: `TodoList` -> `todo_list`.
    pub fn from_component_name(name: &str) -> CardsmithResult<Self> {
        Self::parse(&underscore(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<fragment>.gts`
    pub fn file_name(&self) -> String {
        format!("{}.gts", self.0)
    }
}

impl fmt::Display for FilenameFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn invalid(raw: &str, reason: &str) -> CardsmithError {
    CardsmithError::InvalidFragment {
        fragment: raw.to_string(),
        reason: reason.to_string(),
    }
}

/// Snake-case a CamelCase identifier.
///
/// `TodoList` -> `todo_list`, `HTMLCard` -> `html_card`, `Card2Go` -> `card2_go`.
pub fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            out.push('_');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}
