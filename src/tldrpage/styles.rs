//! Named terminal styles shared by the page renderer and the CLI.
//!
//! Styles are looked up by name so templates only say *what* something is
//! (`style("example")`) and never how it looks.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const TITLE: &str = "title";
    pub const PATH: &str = "path";
    pub const EXAMPLE: &str = "example";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const ERROR: &str = "error";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Styles `text` when `use_color` is set and `name` is known; otherwise
    /// returns it untouched.
    ///
    /// Styling is forced rather than left to terminal detection: the caller
    /// has already decided whether color is wanted.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            _ => text.to_string(),
        }
    }
}

pub static THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::PATH, Style::new().dim())
        .add(names::EXAMPLE, Style::new().green())
        .add(names::PLACEHOLDER, Style::new().bold())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::ERROR, Style::new().red())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_without_color_is_identity() {
        assert_eq!(THEME.apply(names::EXAMPLE, "hello", false), "hello");
    }

    #[test]
    fn test_apply_with_color_wraps_text() {
        let styled = THEME.apply(names::EXAMPLE, "hello", true);
        assert_ne!(styled, "hello");
        assert!(styled.contains("hello"));
        assert_eq!(console::strip_ansi_codes(&styled), "hello");
    }

    #[test]
    fn test_unknown_style_is_plain() {
        assert!(!THEME.has("nope"));
        assert_eq!(THEME.apply("nope", "hello", true), "hello");
    }
}
