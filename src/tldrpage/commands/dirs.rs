use crate::commands::{helpers::lookup_dirs, CmdResult, LookupOptions};
use crate::error::Result;
use crate::init::TldrPaths;

pub fn run(paths: &TldrPaths, options: &LookupOptions) -> Result<CmdResult> {
    let dirs = lookup_dirs(paths, options)?;
    Ok(CmdResult::default().with_candidate_dirs(dirs))
}
