use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Directory;

pub fn run(directory: &Directory) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_members(directory.members().to_vec()))
}
