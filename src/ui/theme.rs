use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the Cardsmith CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";

    // Stage identifiers.
    pub const CODE: &str = "✎";
    pub const FIX: &str = "🔧";
    pub const DIFF: &str = "Δ";
    pub const FILE: &str = "📄";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";

    pub const CODE: &str = "[GEN]";
    pub const FIX: &str = "[FIX]";
    pub const DIFF: &str = "[DIFF]";
    pub const FILE: &str = "[FILE]";
}

// ----------------------------------------------------------------------------
// CardsmithTheme - dialoguer theme with themed select pointer
// ----------------------------------------------------------------------------

/// Custom theme for dialoguer prompts using Cardsmith design tokens.
///
/// Wraps `ColorfulTheme` and only overrides select items, so that ASCII
/// terminals get a plain `>` pointer instead of the unicode arrow.
pub struct CardsmithTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl CardsmithTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    /// Marker in front of the highlighted item
    pub fn pointer(&self) -> &'static str {
        if self.unicode {
            icons::PROGRESS
        } else {
            ">"
        }
    }

    /// Marker in front of other items
    pub fn idle(&self) -> &'static str {
        if self.unicode {
            icons::PENDING
        } else {
            " "
        }
    }
}

impl Theme for CardsmithTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner.format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.inner.format_input_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_input_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        let marker = if active { self.pointer() } else { self.idle() };
        write!(f, "{} {}", marker, text)
    }
}
