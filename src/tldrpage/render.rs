//! # Page Rendering
//!
//! Turns a parsed [`Page`] into display text through a minijinja template
//! (`templates/page.tmp`) and the named styles in [`crate::styles`].
//!
//! Layout lives in the template. Anything that needs real string processing stays
//! in Rust and is handed to the template precomputed; today that is only the
//! `{{placeholder}}` emphasis inside command lines.
//!
//! Rendering is one-way: the output is not page syntax and is not meant to be
//! parsed again.

use crate::page::Page;
use crate::styles::{names, Theme, THEME};
use minijinja::{Environment, Error, Value};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

const PAGE_TEMPLATE: &str = include_str!("templates/page.tmp");

/// `{{identifier}}`, shortest match, no nesting.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("placeholder pattern is valid"));

#[derive(Serialize)]
struct PageView {
    title: String,
    location: Option<String>,
    description: Vec<String>,
    examples: Vec<ExampleView>,
}

#[derive(Serialize)]
struct ExampleView {
    description: String,
    command: String,
}

/// Renders `page` for display. Never fails.
///
/// With `style_enabled`, example descriptions are colored and each
/// `{{identifier}}` in a command line is replaced by the emphasized
/// identifier. Without it, the text is reproduced as parsed.
pub fn render(page: &Page, style_enabled: bool) -> String {
    render_with_theme(page, &THEME, style_enabled)
}

pub fn render_with_theme(page: &Page, theme: &Theme, style_enabled: bool) -> String {
    let view = PageView {
        title: page.title.clone(),
        location: page
            .source_path
            .as_ref()
            .map(|path| path.display().to_string()),
        description: page.description.clone(),
        examples: page
            .examples
            .iter()
            .map(|example| ExampleView {
                description: example.description.clone(),
                command: if style_enabled {
                    emphasize_placeholders(&example.command, theme)
                } else {
                    example.command.clone()
                },
            })
            .collect(),
    };

    render_template(&view, theme, style_enabled)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn render_template(view: &PageView, theme: &Theme, use_color: bool) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    register_style_filter(&mut env, theme.clone(), use_color);
    env.add_template("page", PAGE_TEMPLATE)?;
    env.get_template("page")?.render(view)
}

fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
}

fn emphasize_placeholders(command: &str, theme: &Theme) -> String {
    PLACEHOLDER
        .replace_all(command, |caps: &Captures| {
            theme.apply(names::PLACEHOLDER, &caps[1], true)
        })
        .into_owned()
}
