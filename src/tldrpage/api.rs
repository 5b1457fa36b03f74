//! # API Facade
//!
//! Single entry point for every tldrpage operation. A thin layer: it wires the
//! process-level [`TldrPaths`] into the command functions and otherwise gets out
//! of the way.
//!
//! The facade does no printing and makes no terminal assumptions. External
//! programs (editor, git) are passed in as trait objects so callers, and tests,
//! decide what actually runs.

use crate::commands;
use crate::editor::EditorLauncher;
use crate::error::Result;
use crate::init::TldrPaths;
use crate::upstream::GitRunner;
use std::path::Path;

pub struct TldrApi {
    paths: TldrPaths,
}

impl TldrApi {
    pub fn new(paths: TldrPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &TldrPaths {
        &self.paths
    }

    /// Finds, parses and returns the page for `name`.
    pub fn show(&self, options: &LookupOptions, name: &str) -> Result<CmdResult> {
        commands::show::run(&self.paths, options, name)
    }

    /// Lists the directories a lookup with `options` would search, in order.
    pub fn candidate_dirs(&self, options: &LookupOptions) -> Result<CmdResult> {
        commands::dirs::run(&self.paths, options)
    }

    pub fn edit<E: EditorLauncher>(
        &self,
        editor: &E,
        scratch_dir: &Path,
        name: &str,
    ) -> Result<CmdResult> {
        commands::edit::run(editor, &self.paths, scratch_dir, name)
    }

    /// Clones or pulls the upstream page repository at `url`.
    pub fn update<R: GitRunner>(&self, runner: &R, url: &str) -> Result<CmdResult> {
        commands::update::run(runner, &self.paths.upstream(url)?)
    }
}

pub use commands::{CmdMessage, CmdResult, LookupOptions, MessageLevel};
