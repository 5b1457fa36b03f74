use crate::commands::{helpers::lookup_dirs, CmdResult, LookupOptions};
use crate::error::Result;
use crate::finder::{find_page, read_page};
use crate::init::TldrPaths;

pub fn run(paths: &TldrPaths, options: &LookupOptions, name: &str) -> Result<CmdResult> {
    let dirs = lookup_dirs(paths, options)?;
    let path = find_page(&dirs, name)?;
    let page = read_page(&path)?;
    Ok(CmdResult::default().with_page(page))
}
