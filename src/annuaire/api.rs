//! # API Facade
//!
//! [`AnnuaireApi`] is the single entry point for every operation, whatever
//! the UI driving it. It owns the [`Directory`] and the [`Session`] for the
//! lifetime of the process and is the one place the access gate is enforced:
//! member mutations require an administrator session, photo uploads and all
//! reads do not.
//!
//! The facade dispatches to the command modules and returns structured
//! `Result<CmdResult>` values. It performs no I/O, prints nothing, and holds
//! no presentation logic — rendering and re-rendering after mutations are the
//! caller's job (the store pushes no notifications).

use std::path::Path;

use uuid::Uuid;

use crate::commands;
use crate::error::{AnnuaireError, Result};
use crate::model::{MemberDraft, SearchField};
use crate::platform::ImageEncoder;
use crate::session::Session;
use crate::store::Directory;

pub struct AnnuaireApi {
    directory: Directory,
    session: Session,
}

impl AnnuaireApi {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory,
            session: Session::new(),
        }
    }

    // --- Access gate ---

    pub fn login(&mut self, password: &str) -> bool {
        self.session.login(password)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    // --- Directory reads ---

    pub fn list_members(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.directory)
    }

    pub fn search_members(
        &self,
        query: &str,
        fields: &[SearchField],
    ) -> Result<commands::CmdResult> {
        commands::search::run(&self.directory, query, fields)
    }

    pub fn contact_card(&self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::export::card(&self.directory, id)
    }

    pub fn share_contact(&self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::export::share(&self.directory, id)
    }

    // --- Member mutations (administrator only) ---

    pub fn add_member(&mut self, draft: MemberDraft) -> Result<commands::CmdResult> {
        self.require_admin()?;
        commands::add::run(&mut self.directory, draft)
    }

    pub fn update_member(&mut self, id: &Uuid, draft: MemberDraft) -> Result<commands::CmdResult> {
        self.require_admin()?;
        commands::update::run(&mut self.directory, id, draft)
    }

    pub fn remove_member(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        self.require_admin()?;
        commands::remove::run(&mut self.directory, id)
    }

    // --- Album (open to every visitor) ---

    pub fn add_photo(&mut self, url: String, caption: String) -> Result<commands::CmdResult> {
        commands::album::add_photo(&mut self.directory, url, caption)
    }

    pub fn upload_photo(
        &mut self,
        encoder: &dyn ImageEncoder,
        path: &Path,
        caption: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::album::upload(&mut self.directory, encoder, path, caption)
    }

    pub fn list_photos(&self) -> Result<commands::CmdResult> {
        commands::album::list(&self.directory)
    }

    fn require_admin(&self) -> Result<()> {
        if self.session.is_admin() {
            Ok(())
        } else {
            Err(AnnuaireError::AdminRequired)
        }
    }
}

pub use commands::export::{ContactCard, SharePayload};
pub use commands::{CmdMessage, CmdResult, MessageLevel};
