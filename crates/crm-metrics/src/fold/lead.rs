//! Lead pipeline counts and cost.

use crm_models::{CostBearing, Lead, LeadPhase};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::{total_cost, totals_by_phase, PhaseTotals};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSummary {
    pub total_leads: usize,
    pub lead_total_cost: f64,
    pub leads_by_phase: BTreeMap<LeadPhase, PhaseTotals>,
}

impl LeadSummary {
    /// Number of phases holding at least one lead.
    pub fn active_phases(&self) -> usize {
        self.leads_by_phase.values().filter(|t| t.count > 0).count()
    }
}

pub(crate) fn fold(leads: &[Lead]) -> LeadSummary {
    let leads_by_phase = totals_by_phase(
        &LeadPhase::ALL,
        leads.iter().map(|l| (l.phase, l.entry_cost())),
    );
    let lead_total_cost = total_cost(&leads_by_phase);

    debug!(leads = leads.len(), cost = lead_total_cost, "folded leads");

    LeadSummary {
        total_leads: leads.len(),
        lead_total_cost,
        leads_by_phase,
    }
}
