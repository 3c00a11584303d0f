//! Contact records.
//!
//! Contacts cover both sides of an engagement: client stakeholders and our
//! own staff. Which side a contact is on is not stored here; leads record
//! it through their `our_side_contacts` / `client_side_contacts` sets.

use serde::{Deserialize, Serialize};

use crate::entry::{CostBearing, Entry};
use crate::ids::ContactId;

/// Title keywords that mark a contact as leadership.
pub const LEADERSHIP_KEYWORDS: &[&str] = &["director", "vp", "svp", "cto", "cio"];

/// Free-text personal descriptors shown on the contact card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactProfile {
    pub org_chart: String,
    pub dietary_restrictions: String,
    pub favorite_drink: String,
    pub favorite_food: String,
    pub favorite_vacation: String,
    pub marital_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
    pub kids: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_vacation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_vacation: Option<String>,
    pub address: String,
    pub phone: String,
    pub work_email: String,
    pub personal_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    pub club_addresses: Vec<String>,
}

/// A person in the CRM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub full_name: String,
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub lead_state: String,
    /// Number of SOWs this contact has been involved in.
    #[serde(default)]
    pub sows: u32,
    #[serde(flatten)]
    pub profile: ContactProfile,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Contact {
    /// Creates a contact with an empty profile and timeline.
    pub fn new(
        id: impl Into<ContactId>,
        full_name: impl Into<String>,
        company: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            company: company.into(),
            title: title.into(),
            lead_state: String::new(),
            sows: 0,
            profile: ContactProfile::default(),
            entries: Vec::new(),
        }
    }

    /// Returns true if the title contains a leadership keyword.
    ///
    /// Plain substring match, so "Svp" and "Director of Sales" both qualify.
    pub fn is_leadership(&self) -> bool {
        let title = self.title.to_lowercase();
        LEADERSHIP_KEYWORDS.iter().any(|kw| title.contains(kw))
    }
}

impl CostBearing for Contact {
    fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
