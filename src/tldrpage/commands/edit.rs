use crate::commands::{CmdMessage, CmdResult};
use crate::editor::{edit_page, EditOutcome, EditorLauncher};
use crate::error::Result;
use crate::init::TldrPaths;
use std::path::Path;

pub fn run<E: EditorLauncher>(
    editor: &E,
    paths: &TldrPaths,
    scratch_dir: &Path,
    name: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match edit_page(editor, &paths.user_pages, scratch_dir, name)? {
        EditOutcome::Saved(path) => {
            result.add_message(CmdMessage::success(format!("Saved {}", path.display())))
        }
        EditOutcome::Unchanged(path) => result.add_message(CmdMessage::info(format!(
            "No changes, {} left as is",
            path.display()
        ))),
    }
    Ok(result)
}
