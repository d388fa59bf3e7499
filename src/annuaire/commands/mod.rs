use crate::model::{AlbumPhoto, Member};

use self::export::{ContactCard, SharePayload};

pub mod add;
pub mod album;
pub mod export;
pub mod list;
pub mod remove;
pub mod search;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of one command, for the presentation layer to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_members: Vec<Member>,
    pub listed_members: Vec<Member>,
    pub listed_photos: Vec<AlbumPhoto>,
    pub card: Option<ContactCard>,
    pub share: Option<SharePayload>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_members(mut self, members: Vec<Member>) -> Self {
        self.listed_members = members;
        self
    }

    pub fn with_listed_photos(mut self, photos: Vec<AlbumPhoto>) -> Self {
        self.listed_photos = photos;
        self
    }

    pub fn with_card(mut self, card: ContactCard) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_share(mut self, share: SharePayload) -> Self {
        self.share = Some(share);
        self
    }
}
