use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Logo shown for members that never uploaded one.
pub const PLACEHOLDER_LOGO: &str = "https://picsum.photos/seed/placeholder/200";

/// One directory entry: a business and its primary contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub company_logo: String,
    pub company_name: String,
    pub activity: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl Member {
    pub fn new(draft: MemberDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_logo: draft.company_logo,
            company_name: draft.company_name,
            activity: draft.activity,
            contact_name: draft.contact_name,
            phone: draft.phone,
            email: draft.email,
            website: draft.website,
        }
    }

    /// Replaces every field from the draft. The id never changes.
    pub fn apply(&mut self, draft: MemberDraft) {
        self.company_logo = draft.company_logo;
        self.company_name = draft.company_name;
        self.activity = draft.activity;
        self.contact_name = draft.contact_name;
        self.phone = draft.phone;
        self.email = draft.email;
        self.website = draft.website;
    }
}

/// The fields of a member without its identity, used for both creation and
/// full-replacement edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDraft {
    #[serde(default = "default_logo")]
    pub company_logo: String,
    pub company_name: String,
    pub activity: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

fn default_logo() -> String {
    PLACEHOLDER_LOGO.to_string()
}

/// One uploaded image in the event album.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPhoto {
    pub id: Uuid,
    pub url: String,
    pub caption: String,
    pub added_at: DateTime<Utc>,
}

impl AlbumPhoto {
    pub fn new(url: String, caption: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            caption,
            added_at: Utc::now(),
        }
    }
}

/// Member attributes eligible for substring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    CompanyName,
    Activity,
    ContactName,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [
        SearchField::CompanyName,
        SearchField::Activity,
        SearchField::ContactName,
    ];

    /// The member's value for this field. Static typing has no by-name field
    /// indexing, so the mapping is spelled out.
    pub fn value<'a>(&self, member: &'a Member) -> &'a str {
        match self {
            SearchField::CompanyName => &member.company_name,
            SearchField::Activity => &member.activity,
            SearchField::ContactName => &member.contact_name,
        }
    }

    /// Label shown in the search criteria listing.
    pub fn label(&self) -> &'static str {
        match self {
            SearchField::CompanyName => "Nom de l'entreprise",
            SearchField::Activity => "Activité",
            SearchField::ContactName => "Nom du gérant",
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SearchField::CompanyName => "entreprise",
            SearchField::Activity => "activite",
            SearchField::ContactName => "gerant",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entreprise" | "company" | "companyname" => Ok(SearchField::CompanyName),
            "activite" | "activité" | "activity" => Ok(SearchField::Activity),
            "gerant" | "gérant" | "contact" | "contactname" => Ok(SearchField::ContactName),
            other => Err(format!("critère inconnu : {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn draft() -> MemberDraft {
        MemberDraft {
            company_logo: PLACEHOLDER_LOGO.to_string(),
            company_name: "Acme".to_string(),
            activity: "Plomberie".to_string(),
            contact_name: "Jean Martin".to_string(),
            phone: "01 02 03 04 05".to_string(),
            email: "jean@acme.fr".to_string(),
            website: "https://acme.fr".to_string(),
        }
    }

    #[test]
    fn apply_replaces_fields_but_keeps_id() {
        let mut member = Member::new(draft());
        let id = member.id;

        let mut updated = draft();
        updated.company_name = "Acme SARL".to_string();
        member.apply(updated);

        assert_eq!(member.id, id);
        assert_eq!(member.company_name, "Acme SARL");
    }

    #[test]
    fn search_field_accessors_cover_every_field() {
        let member = Member::new(draft());
        assert_eq!(SearchField::CompanyName.value(&member), "Acme");
        assert_eq!(SearchField::Activity.value(&member), "Plomberie");
        assert_eq!(SearchField::ContactName.value(&member), "Jean Martin");
    }

    #[test]
    fn search_field_parses_french_names() {
        assert_eq!(
            SearchField::from_str("entreprise"),
            Ok(SearchField::CompanyName)
        );
        assert_eq!(SearchField::from_str("Activité"), Ok(SearchField::Activity));
        assert_eq!(SearchField::from_str("gerant"), Ok(SearchField::ContactName));
        assert!(SearchField::from_str("telephone").is_err());
    }

    #[test]
    fn draft_without_logo_gets_the_placeholder() {
        let json = r#"{
            "companyName": "Acme",
            "activity": "Plomberie",
            "contactName": "Jean Martin",
            "phone": "01 02 03 04 05",
            "email": "jean@acme.fr",
            "website": "https://acme.fr"
        }"#;
        let parsed: MemberDraft = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.company_logo, PLACEHOLDER_LOGO);
    }
}
