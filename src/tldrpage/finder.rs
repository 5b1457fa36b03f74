//! # Page Lookup
//!
//! Walks the candidate list from [`crate::location::resolve`] and returns the first
//! `<dir>/<name>.md` that is a regular file. First match wins; priority is
//! entirely the caller's ordering.
//!
//! Only "does not exist" is treated as a miss. Any other `stat` failure
//! (permissions, I/O) aborts the search: silently falling through to a lower
//! priority page would show the user the wrong content.

use crate::error::{Result, TldrError};
use crate::location::sanitize_segment;
use crate::page::{self, Page};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PAGE_EXT: &str = "md";

/// File name for a command's page, with the name reduced to its base component.
pub fn page_file_name(name: &str) -> Result<String> {
    match sanitize_segment(name) {
        Some(base) if !base.is_empty() => Ok(format!("{}.{}", base, PAGE_EXT)),
        _ => Err(TldrError::InvalidCommandName(name.to_string())),
    }
}

/// Returns the path of the first regular `<name>.md` among `candidates`.
pub fn find_page<P: AsRef<Path>>(candidates: &[P], name: &str) -> Result<PathBuf> {
    let file_name = page_file_name(name)?;

    for dir in candidates {
        let path = dir.as_ref().join(&file_name);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {
                debug!(path = %path.display(), "page found");
                return Ok(path);
            }
            Ok(_) => {
                debug!(path = %path.display(), "skipping non-regular entry");
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no page");
            }
            Err(e) => return Err(TldrError::Io(e)),
        }
    }

    Err(TldrError::PageNotFound {
        name: name.to_string(),
    })
}

/// Reads and parses a page, attaching `path` to both the page and any parse error.
pub fn read_page(path: &Path) -> Result<Page> {
    let raw = fs::read(path)?;
    page::parse(&raw)
        .map(|page| page.with_source_path(path))
        .map_err(|source| TldrError::Parse {
            source,
            path: path.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PAGE: &str = "# foo\n\n> Does foo things.\n\n- Run foo:\n\n`foo`\n";

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        (temp, a, b)
    }

    #[test]
    fn test_first_match_in_later_candidate() {
        let (_temp, a, b) = setup();
        fs::write(b.join("foo.md"), PAGE).unwrap();

        let found = find_page(&[&a, &b], "foo").unwrap();
        assert_eq!(found, b.join("foo.md"));
    }

    #[test]
    fn test_earlier_candidate_wins() {
        let (_temp, a, b) = setup();
        fs::write(a.join("foo.md"), PAGE).unwrap();
        fs::write(b.join("foo.md"), PAGE).unwrap();

        let found = find_page(&[&a, &b], "foo").unwrap();
        assert_eq!(found, a.join("foo.md"));
    }

    #[test]
    fn test_not_found_anywhere() {
        let (_temp, a, b) = setup();
        let err = find_page(&[&a, &b], "foo").unwrap_err();
        assert!(matches!(err, TldrError::PageNotFound { ref name } if name == "foo"));
        assert_eq!(err.to_string(), "page not found: foo");
    }

    #[test]
    fn test_missing_candidate_directories_are_misses() {
        let (temp, _a, b) = setup();
        fs::write(b.join("foo.md"), PAGE).unwrap();
        let ghost = temp.path().join("does-not-exist");

        let found = find_page(&[&ghost, &b], "foo").unwrap();
        assert_eq!(found, b.join("foo.md"));
    }

    #[test]
    fn test_directory_named_like_page_is_skipped() {
        let (_temp, a, b) = setup();
        fs::create_dir(a.join("foo.md")).unwrap();
        fs::write(b.join("foo.md"), PAGE).unwrap();

        let found = find_page(&[&a, &b], "foo").unwrap();
        assert_eq!(found, b.join("foo.md"));
    }

    #[test]
    fn test_name_is_reduced_to_base_name() {
        let (_temp, a, _b) = setup();
        fs::write(a.join("foo.md"), PAGE).unwrap();

        let found = find_page(&[&a], "../../foo").unwrap();
        assert_eq!(found, a.join("foo.md"));
    }

    #[test]
    fn test_unusable_name_rejected() {
        let (_temp, a, _b) = setup();
        for name in ["", "..", "/"] {
            let err = find_page(&[&a], name).unwrap_err();
            assert!(matches!(err, TldrError::InvalidCommandName(_)));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_stat_error_aborts_search() {
        let (temp, _a, b) = setup();
        fs::write(b.join("foo.md"), PAGE).unwrap();
        // stat of <file>/foo.md fails with NotADirectory, not NotFound
        let plain_file = temp.path().join("plain");
        fs::write(&plain_file, "").unwrap();

        let err = find_page(&[&plain_file, &b], "foo").unwrap_err();
        assert!(matches!(err, TldrError::Io(ref e) if e.kind() != ErrorKind::NotFound));
    }

    #[test]
    fn test_read_page_sets_source_path() {
        let (_temp, a, _b) = setup();
        let path = a.join("foo.md");
        fs::write(&path, PAGE).unwrap();

        let page = read_page(&path).unwrap();
        assert_eq!(page.title, "foo");
        assert_eq!(page.source_path, Some(path));
    }

    #[test]
    fn test_read_page_reports_path_on_parse_error() {
        let (_temp, a, _b) = setup();
        let path = a.join("broken.md");
        fs::write(&path, "foo\n\n> desc\n\n- x:\n\n`x`\n").unwrap();

        let err = read_page(&path).unwrap_err();
        match &err {
            TldrError::Parse { source, path: p } => {
                assert_eq!(*source, page::ParseError::MissingTitle);
                assert_eq!(p, &path);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("missing title marker"));
        assert!(message.contains("broken.md"));
    }
}
