//! # Cache Layout
//!
//! Everything tldrpage stores lives under one cache home:
//!
//! ```text
//! <cache home>/
//!   config.json        # optional, see crate::config
//!   user/              # user-authored pages, searched first
//!     <command>.md
//!   repo/
//!     <upstream name>/ # git checkout, e.g. "tldr" for tldr.git
//!       pages/<platform>/<command>.md
//!       pages.<lang>/<platform>/<command>.md
//! ```
//!
//! The cache home is the OS cache directory (via the `directories` crate) unless
//! `TLDRPAGE_HOME` is set, which is primarily used by tests to isolate state.
//!
//! [`initialize`] creates `user/` and `repo/` if needed but never the checkout
//! itself; that is the upstream sync's job.

use crate::api::TldrApi;
use crate::config::TldrConfig;
use crate::error::{Result, TldrError};
use crate::location::PageRoots;
use crate::upstream::UpstreamRepo;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const HOME_ENV: &str = "TLDRPAGE_HOME";
const USER_DIR: &str = "user";
const REPO_DIR: &str = "repo";

/// Resolved on-disk locations for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldrPaths {
    pub cache_home: PathBuf,
    pub user_pages: PathBuf,
    pub repo_root: PathBuf,
}

impl TldrPaths {
    pub fn under(cache_home: impl Into<PathBuf>) -> Self {
        let cache_home = cache_home.into();
        Self {
            user_pages: cache_home.join(USER_DIR),
            repo_root: cache_home.join(REPO_DIR),
            cache_home,
        }
    }

    /// Creates the user and repo directories.
    pub fn ensure(&self) -> Result<()> {
        fs::create_dir_all(&self.user_pages)?;
        fs::create_dir_all(&self.repo_root)?;
        Ok(())
    }

    pub fn upstream(&self, url: &str) -> Result<UpstreamRepo> {
        UpstreamRepo::under(&self.repo_root, url)
    }

    pub fn page_roots(&self, url: &str) -> Result<PageRoots> {
        Ok(PageRoots::new(
            &self.user_pages,
            self.upstream(url)?.local_path(),
        ))
    }
}

/// Default cache home: `$TLDRPAGE_HOME`, else the OS cache directory.
pub fn cache_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("", "", "tldrpage")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .ok_or_else(|| {
            TldrError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine a cache directory",
            ))
        })
}

pub struct TldrContext {
    pub api: TldrApi,
    pub config: TldrConfig,
}

/// Builds the API over `home` (or [`cache_home`]) with its stored config.
pub fn initialize(home: Option<&Path>) -> Result<TldrContext> {
    let home = match home {
        Some(path) => path.to_path_buf(),
        None => cache_home()?,
    };
    let paths = TldrPaths::under(home);
    paths.ensure()?;
    let config = TldrConfig::load(&paths.cache_home)?;
    debug!(?paths, ?config, "initialized");

    Ok(TldrContext {
        api: TldrApi::new(paths),
        config,
    })
}
