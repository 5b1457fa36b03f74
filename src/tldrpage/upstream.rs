//! # Upstream Sync
//!
//! Materializes the community page repository under the cache home with `git`:
//! a shallow clone the first time, `git pull` afterwards.
//!
//! The URL is an explicit value carried by [`UpstreamRepo`]; there is no process-wide
//! "current upstream". A checkout whose `origin` points elsewhere is never pulled
//! into: switching upstreams with the same directory name must be a deliberate
//! manual step.
//!
//! Process spawning goes through [`GitRunner`] so the clone/pull decision can be
//! tested without git or a network.

use crate::error::{Result, TldrError};
use crate::location::upstream_dir_name;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// A git invocation: arguments plus the working directory to run in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    pub args: Vec<String>,
    pub dir: Option<PathBuf>,
}

impl GitCommand {
    fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            dir: None,
        }
    }

    fn in_dir(mut self, dir: &Path) -> Self {
        self.dir = Some(dir.to_path_buf());
        self
    }
}

impl std::fmt::Display for GitCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "git {}", self.args.join(" "))
    }
}

pub trait GitRunner {
    /// Runs with the terminal attached; a non-zero exit is an error.
    fn run(&self, cmd: &GitCommand) -> Result<()>;

    /// Runs and returns trimmed stdout; a non-zero exit is an error.
    fn output(&self, cmd: &GitCommand) -> Result<String>;
}

/// Spawns the `git` found on `PATH`.
pub struct SystemGit;

impl SystemGit {
    fn command(cmd: &GitCommand) -> Command {
        let mut command = Command::new("git");
        command.args(&cmd.args);
        if let Some(dir) = &cmd.dir {
            command.current_dir(dir);
        }
        command
    }
}

impl GitRunner for SystemGit {
    fn run(&self, cmd: &GitCommand) -> Result<()> {
        debug!(%cmd, dir = ?cmd.dir, "running git");
        let status = Self::command(cmd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| TldrError::Upstream(format!("failed to launch git: {}", e)))?;

        if !status.success() {
            return Err(TldrError::Upstream(format!("`{}` failed ({})", cmd, status)));
        }
        Ok(())
    }

    fn output(&self, cmd: &GitCommand) -> Result<String> {
        debug!(%cmd, dir = ?cmd.dir, "querying git");
        let output = Self::command(cmd)
            .output()
            .map_err(|e| TldrError::Upstream(format!("failed to launch git: {}", e)))?;

        if !output.status.success() {
            return Err(TldrError::Upstream(format!(
                "`{}` failed: {}",
                cmd,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRepo {
    url: String,
    local_path: PathBuf,
}

impl UpstreamRepo {
    pub fn new(url: impl Into<String>, local_path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            local_path: local_path.into(),
        }
    }

    /// Checkout location for `url` inside `repo_root`: `<repo_root>/<name>`.
    pub fn under(repo_root: &Path, url: &str) -> Result<Self> {
        Ok(Self::new(url, repo_root.join(upstream_dir_name(url)?)))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Decides between clone and pull. Queries `origin` of an existing
    /// checkout but changes nothing.
    pub fn plan<R: GitRunner>(&self, runner: &R) -> Result<GitCommand> {
        let path = &self.local_path;
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(GitCommand::new([
                    "clone".to_string(),
                    "--depth=1".to_string(),
                    "--".to_string(),
                    self.url.clone(),
                    path.display().to_string(),
                ]));
            }
            Err(e) => return Err(TldrError::Io(e)),
        };

        if !meta.is_dir() {
            return Err(TldrError::Upstream(format!(
                "not a directory: {}",
                path.display()
            )));
        }

        let remote = runner.output(&GitCommand::new(["remote", "get-url", "origin"]).in_dir(path))?;
        if remote != self.url {
            return Err(TldrError::Upstream(format!(
                "repository already exists with a different remote url:\n\tPath  : {}\n\tRemote: {}",
                path.display(),
                remote
            )));
        }

        Ok(GitCommand::new(["pull"]).in_dir(path))
    }

    /// Clones or pulls, returning the command that ran.
    pub fn update<R: GitRunner>(&self, runner: &R) -> Result<GitCommand> {
        if let Some(parent) = self.local_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let cmd = self.plan(runner)?;
        info!(%cmd, url = %self.url, path = %self.local_path.display(), "syncing upstream pages");
        runner.run(&cmd)?;
        Ok(cmd)
    }
}
