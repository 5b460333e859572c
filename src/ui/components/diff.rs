use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Lines of unchanged context around each hunk
const CONTEXT_LINES: usize = 3;

/// Unified diff between two code revisions, with old/new line numbers.
pub fn render_revision_diff(
    old_label: &str,
    new_label: &str,
    old: &str,
    new: &str,
    supports_color: bool,
) -> String {
    let diff = TextDiff::from_lines(old, new);
    let old_lines = old.lines().count().max(1);
    let new_lines = new.lines().count().max(1);
    let width = old_lines.max(new_lines).to_string().len();

    let mut out = String::new();
    out.push_str(&color_line(&format!("--- {}", old_label), LineStyle::Header, supports_color));
    out.push('\n');
    out.push_str(&color_line(&format!("+++ {}", new_label), LineStyle::Header, supports_color));
    out.push('\n');

    for (idx, group) in diff.grouped_ops(CONTEXT_LINES).iter().enumerate() {
        if idx > 0 {
            out.push_str(&color_line("@@", LineStyle::Header, supports_color));
            out.push('\n');
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let (old_no, new_no, sign) = match change.tag() {
                    ChangeTag::Delete => (change.old_index(), None, "-"),
                    ChangeTag::Insert => (None, change.new_index(), "+"),
                    ChangeTag::Equal => (change.old_index(), change.new_index(), " "),
                };

                let old_col = number_column(old_no, width);
                let new_col = number_column(new_no, width);
                let value = change.value().trim_end_matches('\n');
                let line = format!("{old_col} {new_col} {sign} {value}");
                out.push_str(&color_line(
                    &line,
                    LineStyle::Body(change.tag()),
                    supports_color,
                ));
                out.push('\n');
            }
        }
    }

    out
}

fn number_column(index: Option<usize>, width: usize) -> String {
    index
        .map(|i| format!("{:>width$}", i + 1, width = width))
        .unwrap_or_else(|| " ".repeat(width))
}

#[derive(Debug, Clone, Copy)]
enum LineStyle {
    Header,
    Body(ChangeTag),
}

fn color_line(s: &str, style: LineStyle, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        LineStyle::Header => theme::colors::INFO,
        LineStyle::Body(ChangeTag::Delete) => theme::colors::ERROR,
        LineStyle::Body(ChangeTag::Insert) => theme::colors::SUCCESS,
        LineStyle::Body(ChangeTag::Equal) => theme::colors::DIM,
    };
    format!("{}", s.with(color))
}
