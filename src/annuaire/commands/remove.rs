use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Directory;
use uuid::Uuid;

pub fn run(directory: &mut Directory, id: &Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match directory.remove_member(id) {
        Some(member) => {
            result.add_message(CmdMessage::success(format!(
                "Membre supprimé : {}",
                member.company_name
            )));
            result.affected_members.push(member);
        }
        None => result.add_message(CmdMessage::info("Ce membre n'existe plus.")),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::DirectoryFixture;

    #[test]
    fn removes_the_member_in_place() {
        let mut fixture = DirectoryFixture::new().with_members(3);
        let id = fixture.directory.members()[1].id;

        let result = run(&mut fixture.directory, &id).unwrap();

        assert_eq!(result.affected_members.len(), 1);
        let names: Vec<_> = fixture
            .directory
            .members()
            .iter()
            .map(|m| m.company_name.as_str())
            .collect();
        assert_eq!(names, ["Entreprise 1", "Entreprise 3"]);
    }

    #[test]
    fn unknown_id_is_a_quiet_no_op() {
        let mut fixture = DirectoryFixture::new().with_members(1);
        let result = run(&mut fixture.directory, &Uuid::new_v4()).unwrap();

        assert!(result.affected_members.is_empty());
        assert_eq!(fixture.directory.members().len(), 1);
    }
}
