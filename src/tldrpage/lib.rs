//! # tldrpage Architecture
//!
//! tldrpage shows short, example-driven usage pages for command-line tools. Pages
//! come from a local checkout of a community repository, with user-written pages
//! taking priority. It is a library that happens to have a CLI client.
//!
//! ## Lookup Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   location   │ → │    finder    │ → │     page     │ → │    render    │
//! │ ordered dirs │   │ first *.md   │   │ strict parse │   │ display text │
//! │ (pure)       │   │ (stat only)  │   │ (pure)       │   │ (pure)       │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! Only the finder touches the filesystem, and only to decide existence. Each
//! stage returns a typed [`error::TldrError`] and none of them print or exit.
//!
//! ## Around the Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, decides on color, prints, exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Layer (commands/*.rs)         │
//! │  - Compose pipeline stages and collaborators                │
//! │  - Return structured `CmdResult` values                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborators                                              │
//! │  - init: cache layout   - upstream: git clone/pull          │
//! │  - editor: $EDITOR      - config: config.json               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`location`]: Candidate directory resolution and input validation
//! - [`finder`]: First-match page lookup and page reading
//! - [`page`]: Page model, template and parser
//! - [`render`]: Templated terminal output
//! - [`styles`]: Named terminal styles
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Per-operation logic
//! - [`init`]: Cache home layout and context setup
//! - [`config`]: Configuration file
//! - [`editor`]: External editor round-trip for user pages
//! - [`upstream`]: Syncing the page repository with git
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod finder;
pub mod init;
pub mod location;
pub mod page;
pub mod render;
pub mod styles;
pub mod upstream;
