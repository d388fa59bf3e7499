use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MemberDraft;
use crate::store::Directory;
use uuid::Uuid;

pub fn run(directory: &mut Directory, id: &Uuid, draft: MemberDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match directory.update_member(id, draft) {
        Some(member) => {
            result.add_message(CmdMessage::success(format!(
                "Membre mis à jour : {}",
                member.company_name
            )));
            result.affected_members.push(member);
        }
        // Editing a record that vanished is not an error, just nothing to do.
        None => result.add_message(CmdMessage::info("Ce membre n'existe plus.")),
    }
    Ok(result)
}
