use crate::commands::LookupOptions;
use crate::error::{Result, TldrError};
use crate::init::TldrPaths;
use crate::location::candidate_dirs;
use std::path::PathBuf;

/// Candidate directories for `options`, narrowed to one entry when an index is set.
pub fn lookup_dirs(paths: &TldrPaths, options: &LookupOptions) -> Result<Vec<PathBuf>> {
    let roots = paths.page_roots(&options.upstream_url)?;
    let mut dirs = candidate_dirs(&roots, &options.platform, &options.language)?;

    if let Some(index) = options.index {
        if index >= dirs.len() {
            return Err(TldrError::IndexOutOfBounds {
                index,
                len: dirs.len(),
            });
        }
        dirs = vec![dirs.swap_remove(index)];
    }
    Ok(dirs)
}
