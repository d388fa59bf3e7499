use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Member;
use crate::store::Directory;
use uuid::Uuid;

/// A contact card ready to be saved: the suggested file name and the text to
/// put in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub filename: String,
    pub contents: String,
}

/// Human-readable share payload for a member's contact details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Renders a member as a VERSION:3.0 contact card.
///
/// Each value lands on its own line with no escaping; callers must not pass
/// field values containing line breaks.
pub fn contact_card(member: &Member) -> String {
    format!(
        "BEGIN:VCARD\n\
         VERSION:3.0\n\
         FN:{}\n\
         ORG:{}\n\
         TITLE:{}\n\
         TEL;TYPE=WORK,VOICE:{}\n\
         EMAIL:{}\n\
         URL:{}\n\
         END:VCARD",
        member.contact_name,
        member.company_name,
        member.activity,
        member.phone,
        member.email,
        member.website
    )
}

/// File name the card is saved under, derived from the contact's name.
pub fn card_filename(member: &Member) -> String {
    format!("{}.vcf", sanitize_filename(&member.contact_name))
}

pub fn share_summary(member: &Member) -> SharePayload {
    SharePayload {
        title: format!("{} - Contact", member.company_name),
        text: format!(
            "Voici le contact de {} de l'entreprise {}:\nTel: {}\nEmail: {}\nSite: {}",
            member.contact_name, member.company_name, member.phone, member.email, member.website
        ),
        url: member.website.clone(),
    }
}

pub fn card(directory: &Directory, id: &Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match directory.member(id) {
        Some(member) => {
            result = result.with_card(ContactCard {
                filename: card_filename(member),
                contents: contact_card(member),
            });
        }
        None => result.add_message(CmdMessage::info("Ce membre n'existe plus.")),
    }
    Ok(result)
}

pub fn share(directory: &Directory, id: &Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match directory.member(id) {
        Some(member) => result = result.with_share(share_summary(member)),
        None => result.add_message(CmdMessage::info("Ce membre n'existe plus.")),
    }
    Ok(result)
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
