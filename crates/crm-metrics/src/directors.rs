//! Director roll-up: our leadership's pipeline, joined through leads.
//!
//! A contact qualifies when their title carries a leadership keyword and they
//! sit on our side of at least one lead. Client executives never qualify,
//! whatever their title. Output follows contact order, and each director's
//! lead list follows lead order.

use crm_models::{Contact, ContactId, CostBearing, Lead, LeadId, LeadPhase};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::warnings::{RecordKind, Warnings};

/// One lead in a director's roll-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorLead {
    pub lead_id: LeadId,
    pub lead_name: String,
    /// Summed entry cost.
    pub cost: f64,
    /// Parsed revenue estimate, in thousands.
    pub revenue: f64,
    pub phase: LeadPhase,
}

/// Pipeline performance of one director.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorMetrics {
    pub director_id: ContactId,
    pub director_name: String,
    pub director_title: String,
    pub director_company: String,
    pub lead_details: Vec<DirectorLead>,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub lead_count: usize,
}

pub(crate) fn roll_up(
    contacts: &[Contact],
    leads: &[Lead],
    warnings: &mut Warnings,
) -> Vec<DirectorMetrics> {
    let our_side: HashSet<&ContactId> = leads
        .iter()
        .flat_map(|l| l.our_side_contacts.iter())
        .collect();

    // Leads nobody on our side works are never reported, so their
    // estimates are left unparsed.
    let details: Vec<Option<DirectorLead>> = leads
        .iter()
        .map(|lead| {
            if lead.our_side_contacts.is_empty() {
                return None;
            }
            Some(DirectorLead {
                lead_id: lead.id.clone(),
                lead_name: lead.lead_name.clone(),
                cost: lead.entry_cost(),
                revenue: warnings.money(
                    RecordKind::Lead,
                    lead.id.as_str(),
                    "revenueEstimate",
                    &lead.revenue_estimate,
                ),
                phase: lead.phase,
            })
        })
        .collect();

    let directors: Vec<DirectorMetrics> = contacts
        .iter()
        .filter(|c| c.is_leadership() && our_side.contains(&c.id))
        .map(|director| {
            let lead_details: Vec<DirectorLead> = leads
                .iter()
                .zip(&details)
                .filter(|(lead, _)| lead.has_our_side_contact(&director.id))
                .filter_map(|(_, detail)| detail.clone())
                .collect();

            DirectorMetrics {
                director_id: director.id.clone(),
                director_name: director.full_name.clone(),
                director_title: director.title.clone(),
                director_company: director.company.clone(),
                total_cost: lead_details.iter().map(|d| d.cost).sum(),
                total_revenue: lead_details.iter().map(|d| d.revenue).sum(),
                lead_count: lead_details.len(),
                lead_details,
            }
        })
        .filter(|d| d.lead_count > 0)
        .collect();

    debug!(
        candidates = our_side.len(),
        directors = directors.len(),
        "rolled up directors"
    );

    directors
}
