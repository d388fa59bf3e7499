use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MemberDraft;
use crate::store::Directory;

pub fn run(directory: &mut Directory, draft: MemberDraft) -> Result<CmdResult> {
    let member = directory.add_member(draft);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Membre ajouté : {}",
        member.company_name
    )));
    result.affected_members.push(member);
    Ok(result)
}
