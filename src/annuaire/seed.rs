//! Initial directory contents.
//!
//! A session starts from a static member list: the built-in one below, or a
//! JSON file passed on the command line. Seed data skips the interactive
//! form, so required fields are checked at load time; a blank logo falls
//! back to the placeholder instead of being rejected.

use std::fs;
use std::path::Path;

use crate::error::{AnnuaireError, Result};
use crate::model::{MemberDraft, PLACEHOLDER_LOGO};

/// Built-in member list, used when no seed file is given.
pub fn default_members() -> Vec<MemberDraft> {
    vec![
        MemberDraft {
            company_logo: "https://picsum.photos/seed/boulangerie/200".to_string(),
            company_name: "Boulangerie Dupain".to_string(),
            activity: "Boulangerie-Pâtisserie".to_string(),
            contact_name: "Marie Dupain".to_string(),
            phone: "06 12 34 56 78".to_string(),
            email: "contact@boulangerie-dupain.fr".to_string(),
            website: "https://www.boulangerie-dupain.fr".to_string(),
        },
        MemberDraft {
            company_logo: "https://picsum.photos/seed/plomberie/200".to_string(),
            company_name: "Plomberie Rivière".to_string(),
            activity: "Plomberie & Chauffage".to_string(),
            contact_name: "Jean Rivière".to_string(),
            phone: "06 23 45 67 89".to_string(),
            email: "jean@plomberie-riviere.fr".to_string(),
            website: "https://www.plomberie-riviere.fr".to_string(),
        },
        MemberDraft {
            company_logo: "https://picsum.photos/seed/garage/200".to_string(),
            company_name: "Garage Morel".to_string(),
            activity: "Réparation automobile".to_string(),
            contact_name: "Paul Morel".to_string(),
            phone: "04 56 78 90 12".to_string(),
            email: "atelier@garage-morel.fr".to_string(),
            website: "https://www.garage-morel.fr".to_string(),
        },
        MemberDraft {
            company_logo: "https://picsum.photos/seed/fleuriste/200".to_string(),
            company_name: "Fleurs de Lune".to_string(),
            activity: "Fleuriste".to_string(),
            contact_name: "Sophie Blanc".to_string(),
            phone: "06 34 56 78 90".to_string(),
            email: "sophie@fleursdelune.fr".to_string(),
            website: "https://www.fleursdelune.fr".to_string(),
        },
    ]
}

/// Loads member drafts from a JSON array of drafts.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Vec<MemberDraft>> {
    let content = fs::read_to_string(path.as_ref())?;
    let mut drafts: Vec<MemberDraft> = serde_json::from_str(&content)?;

    for (i, draft) in drafts.iter_mut().enumerate() {
        if draft.company_logo.trim().is_empty() {
            draft.company_logo = PLACEHOLDER_LOGO.to_string();
        }
        if let Some(field) = missing_field(draft) {
            return Err(AnnuaireError::Seed(format!(
                "entry {}: empty required field ({})",
                i + 1,
                field
            )));
        }
    }
    Ok(drafts)
}

fn missing_field(draft: &MemberDraft) -> Option<&'static str> {
    [
        ("companyName", &draft.company_name),
        ("activity", &draft.activity),
        ("contactName", &draft.contact_name),
        ("phone", &draft.phone),
        ("email", &draft.email),
        ("website", &draft.website),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
}
