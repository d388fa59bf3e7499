use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Member, SearchField};
use crate::store::Directory;

/// Multi-criteria substring filter over the member list.
///
/// A query that trims to nothing keeps every member (the directory shows the
/// full list while the search box is empty). Otherwise a member passes when
/// *any* selected field contains the query, case-insensitively; with no
/// criteria selected at all, every member passes. The match is ordinal — a
/// plain lowercase fold, no locale tailoring.
///
/// Output keeps the input's relative order. Pure: same inputs, same output.
pub fn filter<'a>(members: &'a [Member], query: &str, fields: &[SearchField]) -> Vec<&'a Member> {
    let query = query.trim();
    if query.is_empty() {
        return members.iter().collect();
    }

    let query = query.to_lowercase();
    members
        .iter()
        .filter(|member| {
            if fields.is_empty() {
                return true;
            }
            fields
                .iter()
                .any(|field| field.value(member).to_lowercase().contains(&query))
        })
        .collect()
}

pub fn run(directory: &Directory, query: &str, fields: &[SearchField]) -> Result<CmdResult> {
    let found = filter(directory.members(), query, fields)
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_members(found))
}
