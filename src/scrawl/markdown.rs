//! Markdown to HTML, per theme.
//!
//! Fenced code blocks are part of CommonMark, so both themes get them for free.
//! The light theme additionally turns on GFM tables; the dark one does not.

use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn options(self) -> Options {
        match self {
            Theme::Light => Options::ENABLE_TABLES,
            Theme::Dark => Options::empty(),
        }
    }

    /// Route that renders a stored item in this theme.
    pub fn render_path(self, id: &str) -> String {
        match self {
            Theme::Light => format!("/render/{}", id),
            Theme::Dark => format!("/render_dark/{}", id),
        }
    }

    /// Route the print form posts to.
    pub fn print_action(self) -> &'static str {
        match self {
            Theme::Light => "/print_text",
            Theme::Dark => "/darkprint_text",
        }
    }
}

pub fn to_html(source: &str, theme: Theme) -> String {
    let parser = Parser::new_ext(source, theme.options());
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
