//! Component name extraction
//!
//! Finds the exported component of a card module with a small lexical scan:
//! strings, template literals, comments and `<template>` blocks are skipped,
//! brace depth is tracked, and only `export` statements at the top level of
//! the module are considered.
//!
//! Accepted forms, in priority order:
//! 1. `export default Name;` / `export default class Name ...`
//! 2. `export class Name extends Base` (one of them, or the only one whose
//!    base is a card base class)

use crate::error::{CardsmithError, CardsmithResult};

/// Base classes that mark an exported class as the card itself
pub const CARD_BASES: &[&str] = &["Card", "CardDef"];

/// Words that can follow `export default` without naming a binding
const NON_NAME_KEYWORDS: &[&str] = &[
    "function", "async", "new", "await", "typeof", "void", "class", "extends",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Ident(String),
    Punct(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    kind: TokenKind,
    depth: usize,
    line: usize,
}

impl Token {
    fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(s) => Some(s),
            TokenKind::Punct(_) => None,
        }
    }

    fn is_ident(&self, word: &str) -> bool {
        self.ident() == Some(word)
    }
}

/// A top-level export found in the module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Export {
    Default { name: String },
    Class { name: String, superclass: String },
}

/// Return the declared export name of a card module.
pub fn extract_component_name(code: &str) -> CardsmithResult<String> {
    let exports = find_exports(code);

    if let Some(name) = exports.iter().find_map(|e| match e {
        Export::Default { name } => Some(name),
        Export::Class { .. } => None,
    }) {
        return Ok(name.clone());
    }

    let classes: Vec<(&str, &str)> = exports
        .iter()
        .filter_map(|e| match e {
            Export::Class { name, superclass } => Some((name.as_str(), superclass.as_str())),
            Export::Default { .. } => None,
        })
        .collect();

    match classes.as_slice() {
        [] => Err(CardsmithError::NoExport),
        [(name, _)] => Ok(name.to_string()),
        _ => {
            let cards: Vec<&str> = classes
                .iter()
                .filter(|(_, base)| CARD_BASES.contains(base))
                .map(|(name, _)| *name)
                .collect();
            match cards.as_slice() {
                [name] => Ok(name.to_string()),
                _ => Err(CardsmithError::AmbiguousExport {
                    candidates: classes.iter().map(|(name, _)| name.to_string()).collect(),
                }),
            }
        }
    }
}

/// All top-level `export default` and `export class ... extends` statements, in order.
pub fn find_exports(code: &str) -> Vec<Export> {
    let tokens = tokenize(code);
    let mut exports = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.depth != 0 || !token.is_ident("export") {
            continue;
        }
        let next = |n: usize| tokens.get(i + n);

        match next(1).and_then(Token::ident) {
            Some("default") => {
                let Some(t2) = next(2) else { continue };
                if t2.is_ident("class") {
                    if let Some(name) = next(3).and_then(Token::ident) {
                        if !NON_NAME_KEYWORDS.contains(&name) {
                            exports.push(Export::Default {
                                name: name.to_string(),
                            });
                        }
                    }
                    continue;
                }
                let Some(name) = t2.ident() else { continue };
                if NON_NAME_KEYWORDS.contains(&name) {
                    continue;
                }
                let terminated = match next(3) {
                    None => true,
                    Some(t3) => t3.kind == TokenKind::Punct(';') || t3.line > t2.line,
                };
                if terminated {
                    exports.push(Export::Default {
                        name: name.to_string(),
                    });
                }
            }
            Some("class") => {
                let name = next(2).and_then(Token::ident);
                let extends = next(3).is_some_and(|t| t.is_ident("extends"));
                let superclass = next(4).and_then(Token::ident);
                if let (Some(name), true, Some(superclass)) = (name, extends, superclass) {
                    exports.push(Export::Class {
                        name: name.to_string(),
                        superclass: superclass.to_string(),
                    });
                }
            }
            _ => {}
        }
    }

    exports
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn tokenize(src: &str) -> Vec<Token> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    let mut depth = 0usize;
    let mut line = 1usize;
    // Brace depths at which an open `${` returns to template-literal text.
    let mut substitutions: Vec<usize> = Vec::new();

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\n' => {
                line += 1;
                i += 1;
            }
            c if c.is_whitespace() => i += 1,
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                i += 2;
                while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                    if chars[i] == '\n' {
                        line += 1;
                    }
                    i += 1;
                }
                i = (i + 2).min(chars.len());
            }
            '\'' | '"' => i = skip_string(&chars, i, c),
            '`' => {
                let (next, entered) = scan_template_text(&chars, i + 1, &mut line);
                i = next;
                if entered {
                    substitutions.push(depth);
                    depth += 1;
                }
            }
            '<' if starts_template_block(&chars, i) => {
                i = skip_template_block(&chars, i, &mut line);
            }
            '{' => {
                tokens.push(Token {
                    kind: TokenKind::Punct('{'),
                    depth,
                    line,
                });
                depth += 1;
                i += 1;
            }
            '}' => {
                depth = depth.saturating_sub(1);
                if substitutions.last() == Some(&depth) {
                    substitutions.pop();
                    let (next, entered) = scan_template_text(&chars, i + 1, &mut line);
                    i = next;
                    if entered {
                        substitutions.push(depth);
                        depth += 1;
                    }
                    continue;
                }
                tokens.push(Token {
                    kind: TokenKind::Punct('}'),
                    depth,
                    line,
                });
                i += 1;
            }
            c if is_ident_start(c) => {
                let start = i;
                while i < chars.len() && is_ident_continue(chars[i]) {
                    i += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(chars[start..i].iter().collect()),
                    depth,
                    line,
                });
            }
            c => {
                tokens.push(Token {
                    kind: TokenKind::Punct(c),
                    depth,
                    line,
                });
                i += 1;
            }
        }
    }

    tokens
}

/// Skip a quoted string starting at `start`; unterminated strings end at the line break.
fn skip_string(chars: &[char], start: usize, quote: char) -> usize {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '\n' => return i,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}

/// Scan template-literal text from `i`. Returns the index after the closing
/// backtick, or just past a `${` (second value `true`).
fn scan_template_text(chars: &[char], mut i: usize, line: &mut usize) -> (usize, bool) {
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '`' => return (i + 1, false),
            '$' if chars.get(i + 1) == Some(&'{') => return (i + 2, true),
            '\n' => {
                *line += 1;
                i += 1;
            }
            _ => i += 1,
        }
    }
    (chars.len(), false)
}

const TEMPLATE_OPEN: &str = "<template";
const TEMPLATE_CLOSE: &str = "</template>";

fn matches_at(chars: &[char], i: usize, needle: &str) -> bool {
    let mut j = i;
    for n in needle.chars() {
        if chars.get(j) != Some(&n) {
            return false;
        }
        j += 1;
    }
    true
}

fn starts_template_block(chars: &[char], i: usize) -> bool {
    if !matches_at(chars, i, TEMPLATE_OPEN) {
        return false;
    }
    let after = i + TEMPLATE_OPEN.chars().count();
    chars
        .get(after)
        .is_some_and(|c| *c == '>' || c.is_whitespace())
}

fn skip_template_block(chars: &[char], start: usize, line: &mut usize) -> usize {
    let mut i = start;
    while i < chars.len() {
        if matches_at(chars, i, TEMPLATE_CLOSE) {
            return i + TEMPLATE_CLOSE.chars().count();
        }
        if chars[i] == '\n' {
            *line += 1;
        }
        i += 1;
    }
    chars.len()
}
