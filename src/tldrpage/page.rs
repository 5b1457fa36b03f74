//! # Page Format
//!
//! A page is a small, strictly shaped markdown document:
//!
//! ```text
//! # tar
//!
//! > Archiving utility.
//! > More information: <https://example.com>.
//!
//! - Create an archive:
//!
//! `tar -cf {{target.tar}} {{source}}`
//! ```
//!
//! Three blocks separated by the first two blank lines: title, description,
//! examples. The examples block may itself contain blank lines.
//!
//! [`parse`] is all-or-nothing. Pages are community sourced and a half-parsed page
//! rendered with missing examples is worse than a clear error pointing at the file.
//! The parser does not know where the bytes came from; [`crate::finder::read_page`]
//! attaches the path.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

const TITLE_MARKER: &str = "# ";
const DESCRIPTION_MARKER: &str = "> ";
const EXAMPLE_MARKER: &str = "- ";
const EXAMPLE_SUFFIX: char = ':';
const COMMAND_FENCE: char = '`';

/// Skeleton offered when a user starts a new page.
pub const PAGE_TEMPLATE: &str = "# command-name

> Short, snappy description.
> Preferably one line; two are acceptable if necessary.
> More information: <https://example.com>.

- Example description:

`command -opt1 -opt2 -arg1 {{arg_value}}`

- Example description:

`command -opt1 -opt2`
";

/// Returns [`PAGE_TEMPLATE`] titled for `name`.
pub fn template_for(name: &str) -> String {
    PAGE_TEMPLATE.replacen("command-name", name, 1)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub description: String,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Where the page was read from; `None` until the reader sets it.
    pub source_path: Option<PathBuf>,
    pub title: String,
    pub description: Vec<String>,
    pub examples: Vec<Example>,
}

impl Page {
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("page is not valid UTF-8")]
    InvalidUtf8,

    #[error("expected 3 sections: title, description, examples")]
    MissingSections,

    #[error("missing title marker")]
    MissingTitle,

    #[error("malformed description line")]
    MalformedDescription { line: String },

    #[error("malformed example description")]
    MalformedExample { line: String },

    #[error("dangling example description")]
    DanglingExample { description: String },

    #[error("malformed command line")]
    MalformedCommand { line: String },

    #[error("incomplete example block")]
    IncompleteExamples,
}

/// Parses raw page bytes into a [`Page`] with no source path.
pub fn parse(raw: &[u8]) -> Result<Page, ParseError> {
    let text = std::str::from_utf8(raw).map_err(|_| ParseError::InvalidUtf8)?;
    let text = text.replace("\r\n", "\n");

    let mut blocks = text.trim().splitn(3, "\n\n");
    let (Some(title_block), Some(description_block), Some(examples_block)) =
        (blocks.next(), blocks.next(), blocks.next())
    else {
        return Err(ParseError::MissingSections);
    };

    Ok(Page {
        source_path: None,
        title: parse_title(title_block)?,
        description: parse_description(description_block)?,
        examples: parse_examples(examples_block)?,
    })
}

fn parse_title(block: &str) -> Result<String, ParseError> {
    let title = block
        .strip_prefix(TITLE_MARKER)
        .map(str::trim)
        .ok_or(ParseError::MissingTitle)?;
    if title.is_empty() {
        return Err(ParseError::MissingTitle);
    }
    Ok(title.to_string())
}

fn parse_description(block: &str) -> Result<Vec<String>, ParseError> {
    block
        .lines()
        .map(|line| {
            line.strip_prefix(DESCRIPTION_MARKER)
                .map(|rest| rest.trim().to_string())
                .ok_or_else(|| ParseError::MalformedDescription {
                    line: line.to_string(),
                })
        })
        .collect()
}

enum ExampleLine<'a> {
    Header(&'a str),
    Command(&'a str),
    Other,
}

fn classify(line: &str) -> ExampleLine<'_> {
    if let Some(header) = line
        .strip_prefix(EXAMPLE_MARKER)
        .and_then(|rest| rest.strip_suffix(EXAMPLE_SUFFIX))
        .filter(|body| !body.is_empty())
    {
        return ExampleLine::Header(header.trim());
    }
    if let Some(command) = line
        .strip_prefix(COMMAND_FENCE)
        .and_then(|rest| rest.strip_suffix(COMMAND_FENCE))
    {
        return ExampleLine::Command(command);
    }
    ExampleLine::Other
}

fn parse_examples(block: &str) -> Result<Vec<Example>, ParseError> {
    let mut examples = Vec::new();
    // headers + commands recognized; must come out even
    let mut tally = 0usize;
    let mut lines = block.lines().map(str::trim).filter(|line| !line.is_empty());

    while let Some(line) = lines.next() {
        let description = match classify(line) {
            ExampleLine::Header(description) => description,
            // a command with no header in front of it
            ExampleLine::Command(_) => return Err(ParseError::IncompleteExamples),
            ExampleLine::Other => {
                return Err(ParseError::MalformedExample {
                    line: line.to_string(),
                })
            }
        };
        tally += 1;

        let Some(next) = lines.next() else {
            return Err(ParseError::DanglingExample {
                description: description.to_string(),
            });
        };
        let command = match classify(next) {
            ExampleLine::Command(command) => command,
            ExampleLine::Header(_) => {
                return Err(ParseError::DanglingExample {
                    description: description.to_string(),
                })
            }
            ExampleLine::Other => {
                return Err(ParseError::MalformedCommand {
                    line: next.to_string(),
                })
            }
        };
        tally += 1;

        examples.push(Example {
            description: description.to_string(),
            command: command.to_string(),
        });
    }

    if tally % 2 != 0 {
        return Err(ParseError::IncompleteExamples);
    }
    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAR: &str = "# tar

> Archiving utility.
> More information: <https://example.com>.

- Create an archive:

`tar -cf {{target.tar}} {{source}}`
";

    #[test]
    fn test_parse_happy_path() {
        let page = parse(TAR.as_bytes()).unwrap();
        assert_eq!(page.title, "tar");
        assert_eq!(
            page.description,
            vec!["Archiving utility.", "More information: <https://example.com>."]
        );
        assert_eq!(
            page.examples,
            vec![Example {
                description: "Create an archive".to_string(),
                command: "tar -cf {{target.tar}} {{source}}".to_string(),
            }]
        );
        assert_eq!(page.source_path, None);
    }

    #[test]
    fn test_examples_block_keeps_blank_lines_and_order() {
        let raw = "# ls\n\n> List files.\n\n- List all:\n\n`ls -a`\n\n\n- Long format:\n`ls -l`\n";
        let page = parse(raw.as_bytes()).unwrap();
        let descriptions: Vec<_> = page.examples.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["List all", "Long format"]);
        assert_eq!(page.examples[1].command, "ls -l");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let raw = format!("\n\n  {}\n\n\n", TAR.trim());
        assert_eq!(parse(raw.as_bytes()).unwrap().title, "tar");
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = TAR.replace('\n', "\r\n");
        let page = parse(raw.as_bytes()).unwrap();
        assert_eq!(page.examples.len(), 1);
        assert_eq!(page.description.len(), 2);
    }

    #[test]
    fn test_empty_examples_block_is_rejected_as_missing_section() {
        let raw = "# tar\n\n> Archiving utility.\n";
        assert_eq!(parse(raw.as_bytes()), Err(ParseError::MissingSections));
    }

    #[test]
    fn test_missing_title_marker() {
        let raw = TAR.replacen("# tar", "tar", 1);
        assert_eq!(parse(raw.as_bytes()), Err(ParseError::MissingTitle));

        let raw = TAR.replacen("# tar", "#tar", 1);
        assert_eq!(parse(raw.as_bytes()), Err(ParseError::MissingTitle));
    }

    #[test]
    fn test_blank_title_rejected() {
        let raw = TAR.replacen("# tar", "#    ", 1);
        assert_eq!(parse(raw.as_bytes()), Err(ParseError::MissingTitle));
    }

    #[test]
    fn test_malformed_description_line() {
        let raw = TAR.replacen("> More", "More", 1);
        assert!(matches!(
            parse(raw.as_bytes()),
            Err(ParseError::MalformedDescription { line }) if line.starts_with("More")
        ));
    }

    #[test]
    fn test_header_without_command_is_dangling() {
        let raw = "# tar\n\n> Archiving utility.\n\n- Create an archive:\n";
        assert!(matches!(
            parse(raw.as_bytes()),
            Err(ParseError::DanglingExample { description }) if description == "Create an archive"
        ));
    }

    #[test]
    fn test_header_followed_by_header_is_dangling() {
        let raw = "# tar\n\n> Archiving utility.\n\n- First:\n\n- Second:\n\n`tar`\n";
        assert!(matches!(
            parse(raw.as_bytes()),
            Err(ParseError::DanglingExample { .. })
        ));
    }

    #[test]
    fn test_unfenced_or_mismatched_command() {
        for command in ["tar -cf a b", "`tar -cf a b", "tar -cf a b`", "`", "'tar'"] {
            let raw = format!("# tar\n\n> Archiving utility.\n\n- Create:\n\n{command}\n");
            assert!(
                matches!(parse(raw.as_bytes()), Err(ParseError::MalformedCommand { .. })),
                "expected malformed command for {command:?}"
            );
        }
    }

    #[test]
    fn test_orphan_command_is_incomplete() {
        let raw = "# tar\n\n> Archiving utility.\n\n`tar -x`\n\n- Create:\n\n`tar -c`\n";
        assert_eq!(parse(raw.as_bytes()), Err(ParseError::IncompleteExamples));
    }

    #[test]
    fn test_stray_text_in_examples() {
        let raw = "# tar\n\n> Archiving utility.\n\nSome prose here.\n";
        assert!(matches!(
            parse(raw.as_bytes()),
            Err(ParseError::MalformedExample { .. })
        ));
    }

    #[test]
    fn test_header_needs_text_before_colon() {
        let raw = "# tar\n\n> Archiving utility.\n\n- :\n\n`tar`\n";
        assert!(matches!(
            parse(raw.as_bytes()),
            Err(ParseError::MalformedExample { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        assert_eq!(parse(&[0x23, 0x20, 0xff, 0xfe]), Err(ParseError::InvalidUtf8));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::MissingSections.to_string(),
            "expected 3 sections: title, description, examples"
        );
        assert_eq!(ParseError::MissingTitle.to_string(), "missing title marker");
        assert_eq!(
            ParseError::IncompleteExamples.to_string(),
            "incomplete example block"
        );
    }

    #[test]
    fn test_template_is_a_valid_page() {
        let page = parse(template_for("mytool").as_bytes()).unwrap();
        assert_eq!(page.title, "mytool");
        assert_eq!(page.examples.len(), 2);
        assert_eq!(
            page.examples[0].command,
            "command -opt1 -opt2 -arg1 {{arg_value}}"
        );
    }
}
