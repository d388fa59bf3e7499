//! # Record Store
//!
//! [`Directory`] is the exclusive owner of the two in-memory collections: the
//! member list and the photo album. Both live for one session only — there is
//! no persistence backend, and none is abstracted for.
//!
//! Ordering is part of the contract:
//! - members keep **insertion order**; edits keep their position and deletes
//!   remove in place;
//! - photos are **newest first**: every upload lands at the front.
//!
//! The store assigns identities and never validates field contents — required
//! fields are checked by whichever layer collects the input (the interactive
//! form, or the seed loader). No operation here can fail for well-formed
//! input, which is why nothing returns `Result`; the two lookups that can
//! miss return `Option` and treat an unknown id as a no-op.

use crate::model::{AlbumPhoto, Member, MemberDraft};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct Directory {
    members: Vec<Member>,
    photos: Vec<AlbumPhoto>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from a seed list, in order.
    pub fn with_members(drafts: Vec<MemberDraft>) -> Self {
        Self {
            members: drafts.into_iter().map(Member::new).collect(),
            photos: Vec::new(),
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn photos(&self) -> &[AlbumPhoto] {
        &self.photos
    }

    pub fn member(&self, id: &Uuid) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Appends a new member with a fresh id and returns it.
    pub fn add_member(&mut self, draft: MemberDraft) -> Member {
        let member = Member::new(draft);
        self.members.push(member.clone());
        member
    }

    /// Replaces every field of the member with `id`, keeping its id and its
    /// position in the list. Unknown ids are ignored.
    pub fn update_member(&mut self, id: &Uuid, draft: MemberDraft) -> Option<Member> {
        let member = self.members.iter_mut().find(|m| &m.id == id)?;
        member.apply(draft);
        Some(member.clone())
    }

    /// Removes the member with `id` in place. Unknown ids are ignored.
    pub fn remove_member(&mut self, id: &Uuid) -> Option<Member> {
        let position = self.members.iter().position(|m| &m.id == id)?;
        Some(self.members.remove(position))
    }

    /// Inserts a new photo at the front of the album.
    pub fn add_photo(&mut self, url: String, caption: String) -> AlbumPhoto {
        let photo = AlbumPhoto::new(url, caption);
        self.photos.insert(0, photo.clone());
        photo
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::PLACEHOLDER_LOGO;

    pub fn draft(company: &str, activity: &str, contact: &str) -> MemberDraft {
        MemberDraft {
            company_logo: PLACEHOLDER_LOGO.to_string(),
            company_name: company.to_string(),
            activity: activity.to_string(),
            contact_name: contact.to_string(),
            phone: "01 23 45 67 89".to_string(),
            email: "contact@exemple.fr".to_string(),
            website: "https://exemple.fr".to_string(),
        }
    }

    pub struct DirectoryFixture {
        pub directory: Directory,
    }

    impl Default for DirectoryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DirectoryFixture {
        pub fn new() -> Self {
            Self {
                directory: Directory::new(),
            }
        }

        pub fn with_members(mut self, count: usize) -> Self {
            for i in 0..count {
                self.directory.add_member(draft(
                    &format!("Entreprise {}", i + 1),
                    "Commerce",
                    &format!("Contact {}", i + 1),
                ));
            }
            self
        }

        pub fn with_member(mut self, company: &str, activity: &str, contact: &str) -> Self {
            self.directory.add_member(draft(company, activity, contact));
            self
        }
    }
}
