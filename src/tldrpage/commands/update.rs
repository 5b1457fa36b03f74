use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::upstream::{GitRunner, UpstreamRepo};

pub fn run<R: GitRunner>(runner: &R, repo: &UpstreamRepo) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let cmd = repo.update(runner)?;
    result.add_message(CmdMessage::info(format!("Ran `{}`", cmd)));
    result.add_message(CmdMessage::success(format!(
        "Pages from {} are up to date",
        repo.url()
    )));
    Ok(result)
}
