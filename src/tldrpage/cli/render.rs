//! Terminal output for everything that is not a page. Pages go through
//! [`tldrpage::render`].

use std::path::PathBuf;
use tldrpage::api::{CmdMessage, MessageLevel};
use tldrpage::styles::{names, THEME};

/// Candidate directory table, one row per directory with its `--index` value.
pub fn render_dirs(dirs: &[PathBuf]) -> String {
    let mut output = String::from("[Index]\t[Directory]\n");
    for (i, dir) in dirs.iter().enumerate() {
        output.push_str(&format!("{:>4}\t{:?}\n", i, dir.display().to_string()));
    }
    output
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    messages
        .iter()
        .map(|message| {
            let style = match message.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Error => names::ERROR,
            };
            format!("{}\n", THEME.apply(style, &message.content, use_color))
        })
        .collect()
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dirs() {
        let dirs = vec![PathBuf::from("/c/user"), PathBuf::from("/c/repo/tldr/pages/common")];
        assert_eq!(
            render_dirs(&dirs),
            "[Index]\t[Directory]\n   0\t\"/c/user\"\n   1\t\"/c/repo/tldr/pages/common\"\n"
        );
    }

    #[test]
    fn test_render_messages_plain() {
        let messages = vec![CmdMessage::info("one"), CmdMessage::success("two")];
        assert_eq!(render_messages(&messages, false), "one\ntwo\n");
    }

    #[test]
    fn test_render_messages_colored() {
        let messages = vec![CmdMessage::error("bad")];
        let out = render_messages(&messages, true);
        assert_ne!(out, "bad\n");
        assert_eq!(console::strip_ansi_codes(&out), "bad\n");
    }

    #[test]
    fn test_render_no_messages() {
        assert_eq!(render_messages(&[], true), "");
    }
}
