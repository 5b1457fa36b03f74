//! # Page Locations
//!
//! Decides *where* a page may live, never whether it is actually there.
//!
//! Pages come from two roots:
//! - **User root**: pages written or overridden locally (see [`crate::editor`]).
//! - **Upstream root**: a local checkout of a community page repository, laid out as
//!   `pages[.<lang>]/<platform-or-common>/<command>.md`.
//!
//! [`resolve`] turns a validated [`SearchConfig`] into an ordered candidate list:
//!
//! ```text
//! 1. <user>
//! 2. <upstream>/pages.<lang>/common        (lang set)
//! 3. <upstream>/pages.<lang>/<platform>    (lang and platform set)
//! 4. <upstream>/pages/common
//! 5. <upstream>/pages/<platform>           (platform set)
//! ```
//!
//! Order is priority. The list is not deduplicated; lookup stops at the first hit
//! so duplicates cost one extra `stat` at most.

use crate::error::{Result, TldrError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name (under the upstream root) holding English pages.
pub const PAGES_DIR: &str = "pages";
/// Platform-independent pages directory.
pub const COMMON_DIR: &str = "common";

/// The two roots a lookup searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoots {
    pub user: PathBuf,
    pub upstream: PathBuf,
}

impl PageRoots {
    pub fn new(user: impl Into<PathBuf>, upstream: impl Into<PathBuf>) -> Self {
        Self {
            user: user.into(),
            upstream: upstream.into(),
        }
    }
}

/// Validated platform and language preference.
///
/// Construct through [`SearchConfig::new`]; an instance always holds a
/// language that is empty or two lowercase ASCII letters, and a platform that
/// is empty or a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchConfig {
    platform: String,
    language: String,
}

impl SearchConfig {
    pub fn new(platform: &str, language: &str) -> Result<Self> {
        if !language.is_empty() && !is_valid_language(language) {
            return Err(TldrError::InvalidLanguageCode(language.to_string()));
        }
        let platform = sanitize_segment(platform)
            .ok_or_else(|| TldrError::InvalidPlatform(platform.to_string()))?;

        Ok(Self {
            platform,
            language: language.to_string(),
        })
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Lazy ISO 639-1 check: exactly two lowercase ASCII letters.
///
/// Region-qualified tags such as `pt_BR` are rejected.
pub fn is_valid_language(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase())
}

/// Reduces user input to its final path component.
///
/// Returns `Some("")` for empty input and `None` when no usable component
/// remains (`..`, `.`, `/`).
pub fn sanitize_segment(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return Some(String::new());
    }
    Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

/// Builds the ordered candidate directory list. Pure; touches no filesystem.
pub fn resolve(roots: &PageRoots, search: &SearchConfig) -> Vec<PathBuf> {
    let mut dirs = vec![roots.user.clone()];

    if !search.language.is_empty() {
        let localized = roots
            .upstream
            .join(format!("{}.{}", PAGES_DIR, search.language));
        dirs.push(localized.join(COMMON_DIR));
        if !search.platform.is_empty() {
            dirs.push(localized.join(&search.platform));
        }
    }

    let english = roots.upstream.join(PAGES_DIR);
    dirs.push(english.join(COMMON_DIR));
    if !search.platform.is_empty() {
        dirs.push(english.join(&search.platform));
    }

    debug!(?dirs, platform = %search.platform, language = %search.language, "resolved candidate directories");
    dirs
}

/// Validates raw user strings and resolves them in one step.
pub fn candidate_dirs(roots: &PageRoots, platform: &str, language: &str) -> Result<Vec<PathBuf>> {
    let search = SearchConfig::new(platform, language)?;
    Ok(resolve(roots, &search))
}

/// Platform directory name matching the host OS, or empty when upstream has none.
pub fn default_platform() -> &'static str {
    platform_for_os(std::env::consts::OS)
}

fn platform_for_os(os: &str) -> &'static str {
    match os {
        "linux" => "linux",
        "macos" => "osx",
        "windows" => "windows",
        "solaris" | "illumos" => "sunos",
        _ => "",
    }
}

/// Extracts a language preference from a locale string like `ja_JP.UTF-8`.
///
/// Values of two characters or fewer (`C`, `en`) yield no preference, matching
/// how `LANG` is normally populated with a region suffix.
pub fn language_from_locale(locale: &str) -> String {
    if locale.len() <= 2 {
        return String::new();
    }
    match locale.get(..2) {
        Some(prefix) if is_valid_language(prefix) => prefix.to_string(),
        _ => String::new(),
    }
}

/// Local directory name for an upstream URL: its last segment without `.git`.
///
/// URLs that leave no usable name (`""`, `https://x/..`, `https://x/.git`) are
/// rejected, since the checkout would otherwise land on the repo root itself.
pub fn upstream_dir_name(url: &str) -> Result<String> {
    let trimmed = url.trim_end_matches('/');
    let base = trimmed.rsplit(|c| c == '/' || c == ':').next().unwrap_or(trimmed);
    let name = base.strip_suffix(".git").unwrap_or(base);
    match sanitize_segment(name) {
        Some(segment) if !segment.is_empty() && segment == name => Ok(segment),
        _ => Err(TldrError::Upstream(format!(
            "no repository name in url: {:?}",
            url
        ))),
    }
}
