use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Code,
    Fix,
    Diff,
    File,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Code) => theme::icons::CODE,
            (true, Icon::Fix) => theme::icons::FIX,
            (true, Icon::Diff) => theme::icons::DIFF,
            (true, Icon::File) => theme::icons::FILE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Code) => theme::icons_ascii::CODE,
            (false, Icon::Fix) => theme::icons_ascii::FIX,
            (false, Icon::Diff) => theme::icons_ascii::DIFF,
            (false, Icon::File) => theme::icons_ascii::FILE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress | Icon::Fix => theme::colors::WARNING,
            Icon::Arrow | Icon::File => theme::colors::DIM,
            Icon::Code | Icon::Diff => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
