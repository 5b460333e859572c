//! Markdown code-fence stripping
//!
//! Models often wrap "code only" answers in a fenced block. When a response
//! opens with a fence for a recognized language, only the interior is kept.

/// Language tags whose fences are stripped (compared case-insensitively)
pub const FENCE_LANGUAGES: &[&str] = &[
    "typescript",
    "ts",
    "javascript",
    "js",
    "gts",
    "glimmer",
    "handlebars",
    "hbs",
    "json",
    "css",
    "html",
];

const FENCE: &str = "```";

/// Language tag of the opening fence, if `text` starts with one
pub fn fence_language(text: &str) -> Option<&str> {
    let rest = text.trim_start().strip_prefix(FENCE)?;
    let first_line = rest.split('\n').next().unwrap_or_default();
    first_line.split_whitespace().next()
}

/// Whether `tag` is a recognized fence language
pub fn is_known_language(tag: &str) -> bool {
    FENCE_LANGUAGES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(tag))
}

/// Strip a leading fenced-code block for a recognized language.
///
/// Returns the text between the opening fence line and the first line that
/// is only a closing fence. Without such a line the interior runs to the end
/// of input, minus a closing fence glued to the last line. Text without an
/// opening fence, or with an unrecognized tag, is returned unchanged.
pub fn strip_code_fence(text: &str) -> &str {
    let Some(tag) = fence_language(text) else {
        return text;
    };
    if !is_known_language(tag) {
        return text;
    }

    let opened = text.trim_start();
    let Some(newline) = opened.find('\n') else {
        return text;
    };
    let body = &opened[newline + 1..];

    let mut offset = 0;
    let mut interior = body;
    let mut closed = false;
    for line in body.split_inclusive('\n') {
        if line.trim() == FENCE {
            interior = &body[..offset];
            closed = true;
            break;
        }
        offset += line.len();
    }

    if !closed {
        if let Some(rest) = interior.trim_end().strip_suffix(FENCE) {
            interior = rest;
        }
    }

    let interior = interior.strip_suffix('\n').unwrap_or(interior);
    interior.strip_suffix('\r').unwrap_or(interior)
}
