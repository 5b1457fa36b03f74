//! # Editing User Pages
//!
//! User pages live in the user root and shadow upstream pages of the same name.
//! Editing is a round-trip through a scratch copy:
//!
//! 1. The existing user page (or [`template_for`] the name) is written to a
//!    scratch file and opened in the external editor.
//! 2. An unchanged buffer commits nothing. A fresh template left untouched never
//!    becomes a page.
//! 3. The buffer must [`parse`]. A page that does not parse is not committed;
//!    the scratch file is left in place and its path is reported so the edit
//!    is not lost.
//! 4. Otherwise the buffer replaces the user page.

use crate::error::{Result, TldrError};
use crate::finder::page_file_name;
use crate::page::{parse, template_for};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Opens a file in an external program and waits for it to exit.
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Launches the user's editor (see [`get_editor`]).
pub struct SystemEditor {
    command: String,
}

impl SystemEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn detect() -> Result<Self> {
        get_editor().map(Self::new)
    }
}

impl EditorLauncher for SystemEditor {
    fn open(&self, path: &Path) -> Result<()> {
        // $EDITOR may carry flags, e.g. "code --wait"
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| TldrError::Editor("empty editor command".to_string()))?;

        debug!(editor = %self.command, path = %path.display(), "launching editor");
        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|e| {
                TldrError::Editor(format!("Failed to launch editor '{}': {}", self.command, e))
            })?;

        if !status.success() {
            return Err(TldrError::Editor(format!(
                "Editor '{}' exited with non-zero status",
                self.command
            )));
        }
        Ok(())
    }
}

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "emacs", "nano", "vi"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(TldrError::Editor(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The user page at this path was created or replaced.
    Saved(PathBuf),
    /// The buffer came back identical; nothing was written.
    Unchanged(PathBuf),
}

/// Runs the edit round-trip for the user page `name`.
///
/// `scratch_dir` holds the temporary copy handed to the editor.
pub fn edit_page<E: EditorLauncher>(
    editor: &E,
    user_root: &Path,
    scratch_dir: &Path,
    name: &str,
) -> Result<EditOutcome> {
    let file_name = page_file_name(name)?;
    let command_name = file_name.trim_end_matches(".md");
    let page_path = user_root.join(&file_name);

    let initial = match fs::metadata(&page_path) {
        Ok(meta) if meta.is_file() => fs::read_to_string(&page_path)?,
        Ok(_) => {
            return Err(TldrError::Editor(format!(
                "not a regular file: {}",
                page_path.display()
            )))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => template_for(command_name),
        Err(e) => return Err(TldrError::Io(e)),
    };

    fs::create_dir_all(scratch_dir)?;
    let scratch = scratch_dir.join(format!("tldrpage-{}-{}", std::process::id(), file_name));
    fs::write(&scratch, &initial)?;

    if let Err(e) = editor.open(&scratch) {
        let _ = fs::remove_file(&scratch);
        return Err(e);
    }

    let edited = fs::read_to_string(&scratch)?;
    if edited == initial {
        let _ = fs::remove_file(&scratch);
        debug!(path = %page_path.display(), "page unchanged");
        return Ok(EditOutcome::Unchanged(page_path));
    }

    if let Err(source) = parse(edited.as_bytes()) {
        warn!(scratch = %scratch.display(), error = %source, "edited page does not parse; not saved");
        return Err(TldrError::Parse {
            source,
            path: scratch,
        });
    }

    fs::create_dir_all(user_root)?;
    fs::write(&page_path, edited)?;
    let _ = fs::remove_file(&scratch);
    Ok(EditOutcome::Saved(page_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ParseError;
    use tempfile::TempDir;

    /// Stands in for the external editor by rewriting the file with a closure.
    struct FakeEditor<F: Fn(&str) -> String> {
        rewrite: F,
    }

    impl<F: Fn(&str) -> String> EditorLauncher for FakeEditor<F> {
        fn open(&self, path: &Path) -> Result<()> {
            let before = fs::read_to_string(path)?;
            fs::write(path, (self.rewrite)(&before))?;
            Ok(())
        }
    }

    struct FailingEditor;

    impl EditorLauncher for FailingEditor {
        fn open(&self, _path: &Path) -> Result<()> {
            Err(TldrError::Editor("exited with non-zero status".into()))
        }
    }

    const VALID: &str = "# foo\n\n> Does foo.\n\n- Run it:\n\n`foo {{arg}}`\n";

    fn dirs() -> (TempDir, PathBuf, PathBuf) {
        let temp = TempDir::new().unwrap();
        let user = temp.path().join("user");
        let scratch = temp.path().join("scratch");
        (temp, user, scratch)
    }

    fn scratch_files(dir: &Path) -> usize {
        fs::read_dir(dir).map(|it| it.count()).unwrap_or(0)
    }

    #[test]
    fn test_new_page_from_template_is_saved() {
        let (_temp, user, scratch) = dirs();
        let editor = FakeEditor {
            rewrite: |before: &str| {
                assert!(before.starts_with("# foo\n"));
                VALID.to_string()
            },
        };

        let outcome = edit_page(&editor, &user, &scratch, "foo").unwrap();
        assert_eq!(outcome, EditOutcome::Saved(user.join("foo.md")));
        assert_eq!(fs::read_to_string(user.join("foo.md")).unwrap(), VALID);
        assert_eq!(scratch_files(&scratch), 0);
    }

    #[test]
    fn test_untouched_template_is_not_saved() {
        let (_temp, user, scratch) = dirs();
        let editor = FakeEditor {
            rewrite: |before: &str| before.to_string(),
        };

        let outcome = edit_page(&editor, &user, &scratch, "foo").unwrap();
        assert_eq!(outcome, EditOutcome::Unchanged(user.join("foo.md")));
        assert!(!user.join("foo.md").exists());
        assert_eq!(scratch_files(&scratch), 0);
    }

    #[test]
    fn test_existing_page_is_edited() {
        let (_temp, user, scratch) = dirs();
        fs::create_dir_all(&user).unwrap();
        fs::write(user.join("foo.md"), VALID).unwrap();

        let editor = FakeEditor {
            rewrite: |before: &str| {
                assert_eq!(before, VALID);
                before.replace("Does foo.", "Does foo better.")
            },
        };

        edit_page(&editor, &user, &scratch, "foo").unwrap();
        let saved = fs::read_to_string(user.join("foo.md")).unwrap();
        assert!(saved.contains("Does foo better."));
    }

    #[test]
    fn test_invalid_edit_is_rejected_and_kept() {
        let (_temp, user, scratch) = dirs();
        fs::create_dir_all(&user).unwrap();
        fs::write(user.join("foo.md"), VALID).unwrap();

        let editor = FakeEditor {
            rewrite: |before: &str| before.replace("# foo", "foo"),
        };

        let err = edit_page(&editor, &user, &scratch, "foo").unwrap_err();
        match err {
            TldrError::Parse { source, path } => {
                assert_eq!(source, ParseError::MissingTitle);
                assert!(path.starts_with(&scratch));
                assert!(fs::read_to_string(&path).unwrap().starts_with("foo\n"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs::read_to_string(user.join("foo.md")).unwrap(), VALID);
    }

    #[test]
    fn test_editor_failure_commits_nothing() {
        let (_temp, user, scratch) = dirs();

        let err = edit_page(&FailingEditor, &user, &scratch, "foo").unwrap_err();
        assert!(matches!(err, TldrError::Editor(_)));
        assert!(!user.join("foo.md").exists());
        assert_eq!(scratch_files(&scratch), 0);
    }

    #[test]
    fn test_directory_in_place_of_page() {
        let (_temp, user, scratch) = dirs();
        fs::create_dir_all(user.join("foo.md")).unwrap();
        let editor = FakeEditor {
            rewrite: |_: &str| VALID.to_string(),
        };

        let err = edit_page(&editor, &user, &scratch, "foo").unwrap_err();
        assert!(matches!(err, TldrError::Editor(ref msg) if msg.contains("not a regular file")));
    }

    #[test]
    fn test_name_is_reduced_to_base_name() {
        let (_temp, user, scratch) = dirs();
        let editor = FakeEditor {
            rewrite: |_: &str| VALID.to_string(),
        };

        let outcome = edit_page(&editor, &user, &scratch, "../../foo").unwrap();
        assert_eq!(outcome, EditOutcome::Saved(user.join("foo.md")));
    }
}
