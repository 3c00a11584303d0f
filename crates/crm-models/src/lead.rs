//! Sales leads and their pipeline phases.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entry::{CostBearing, Entry};
use crate::ids::{ContactId, LeadId, SowId};

/// Pipeline phase of a lead, in kanban column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum LeadPhase {
    #[default]
    New,
    Qualified,
    Proposal,
    Negotiation,
    Won,
}

impl LeadPhase {
    /// Every phase, in pipeline order.
    pub const ALL: [LeadPhase; 5] = [
        LeadPhase::New,
        LeadPhase::Qualified,
        LeadPhase::Proposal,
        LeadPhase::Negotiation,
        LeadPhase::Won,
    ];

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadPhase::New => "New",
            LeadPhase::Qualified => "Qualified",
            LeadPhase::Proposal => "Proposal",
            LeadPhase::Negotiation => "Negotiation",
            LeadPhase::Won => "Won",
        }
    }
}

impl fmt::Display for LeadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A potential engagement with a client organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub lead_name: String,
    #[serde(default)]
    pub client_org_name: String,
    #[serde(default)]
    pub client_lead_name: String,
    #[serde(default)]
    pub my_company_contact_name: String,
    /// Primary client contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<ContactId>,
    pub phase: LeadPhase,
    #[serde(default)]
    pub description: String,
    /// Contacts on the client's side of the deal.
    #[serde(default)]
    pub client_side_contacts: Vec<ContactId>,
    /// Contacts from our own company working the deal.
    #[serde(default, rename = "myCompanySideContacts")]
    pub our_side_contacts: Vec<ContactId>,
    #[serde(default)]
    pub employees_required: u32,
    #[serde(default)]
    pub project_duration: String,
    #[serde(default)]
    pub potential_start_date: String,
    #[serde(default)]
    pub potential_end_date: String,
    /// Free-text money, e.g. "$1.2M".
    #[serde(default)]
    pub revenue_estimate: String,
    /// Set once the lead is won and converted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sow_id: Option<SowId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials_link: Option<String>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Lead {
    /// Creates a lead in the given phase with no contacts or entries.
    pub fn new(id: impl Into<LeadId>, lead_name: impl Into<String>, phase: LeadPhase) -> Self {
        Self {
            id: id.into(),
            lead_name: lead_name.into(),
            client_org_name: String::new(),
            client_lead_name: String::new(),
            my_company_contact_name: String::new(),
            contact_id: None,
            phase,
            description: String::new(),
            client_side_contacts: Vec::new(),
            our_side_contacts: Vec::new(),
            employees_required: 0,
            project_duration: String::new(),
            potential_start_date: String::new(),
            potential_end_date: String::new(),
            revenue_estimate: String::new(),
            sow_id: None,
            materials_link: None,
            entries: Vec::new(),
        }
    }

    /// Returns true if the contact works this lead from our side.
    pub fn has_our_side_contact(&self, contact_id: &ContactId) -> bool {
        self.our_side_contacts.contains(contact_id)
    }
}

impl CostBearing for Lead {
    fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
