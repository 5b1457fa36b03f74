//! # CLI Behavior
//!
//! This is **one possible UI client** for tldrpage, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! color decisions.
//!
//! Color is on when all of these hold: no `--no-color`, `color` is not disabled
//! in the config file, and stdout supports it (not a pipe, not `TERM=dumb`).
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch from parsed arguments to the API
//! - `render`: Output formatting for directory lists and messages
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
mod setup;

pub use commands::run;
