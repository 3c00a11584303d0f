//! Builder patterns for records with many optional fields.

use crate::entry::Entry;
use crate::ids::{ContactId, LeadId, SowId};
use crate::lead::{Lead, LeadPhase};

/// Builder for creating Lead instances with a fluent API.
#[derive(Debug, Clone)]
pub struct LeadBuilder {
    id: LeadId,
    lead_name: String,
    phase: LeadPhase,
    client_org_name: String,
    revenue_estimate: String,
    our_side: Vec<ContactId>,
    client_side: Vec<ContactId>,
    sow_id: Option<SowId>,
    entries: Vec<Entry>,
}

impl LeadBuilder {
    /// Creates a new LeadBuilder with required fields.
    pub fn new(id: impl Into<LeadId>, lead_name: impl Into<String>, phase: LeadPhase) -> Self {
        Self {
            id: id.into(),
            lead_name: lead_name.into(),
            phase,
            client_org_name: String::new(),
            revenue_estimate: String::new(),
            our_side: Vec::new(),
            client_side: Vec::new(),
            sow_id: None,
            entries: Vec::new(),
        }
    }

    /// Sets the client organization.
    pub fn client(mut self, org: impl Into<String>) -> Self {
        self.client_org_name = org.into();
        self
    }

    /// Sets the revenue estimate text.
    pub fn revenue(mut self, estimate: impl Into<String>) -> Self {
        self.revenue_estimate = estimate.into();
        self
    }

    /// Adds a contact on our side.
    pub fn our_contact(mut self, id: impl Into<ContactId>) -> Self {
        self.our_side.push(id.into());
        self
    }

    /// Adds a contact on the client side.
    pub fn client_contact(mut self, id: impl Into<ContactId>) -> Self {
        self.client_side.push(id.into());
        self
    }

    /// Links the SOW the lead converted into.
    pub fn sow(mut self, id: impl Into<SowId>) -> Self {
        self.sow_id = Some(id.into());
        self
    }

    /// Adds a timeline entry with the given cost.
    pub fn entry(mut self, date: impl Into<String>, text: impl Into<String>, cost: f64) -> Self {
        self.entries.push(Entry::new(date, text, cost));
        self
    }

    /// Builds the Lead.
    pub fn build(self) -> Lead {
        let mut lead = Lead::new(self.id, self.lead_name, self.phase);
        lead.client_org_name = self.client_org_name;
        lead.revenue_estimate = self.revenue_estimate;
        lead.our_side_contacts = self.our_side;
        lead.client_side_contacts = self.client_side;
        lead.sow_id = self.sow_id;
        lead.entries = self.entries;
        lead
    }
}

/// Convenience methods on Lead for creating builders.
impl Lead {
    /// Creates a builder for a new lead.
    pub fn builder(
        id: impl Into<LeadId>,
        lead_name: impl Into<String>,
        phase: LeadPhase,
    ) -> LeadBuilder {
        LeadBuilder::new(id, lead_name, phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::CostBearing;

    #[test]
    fn test_builder_basic() {
        let lead = Lead::builder("lead-1", "Data platform", LeadPhase::Qualified).build();

        assert_eq!(lead.id.as_str(), "lead-1");
        assert_eq!(lead.lead_name, "Data platform");
        assert_eq!(lead.phase, LeadPhase::Qualified);
        assert!(lead.our_side_contacts.is_empty());
        assert!(lead.entries.is_empty());
    }

    #[test]
    fn test_builder_full() {
        let lead = Lead::builder("lead-2", "Mobile app", LeadPhase::Won)
            .client("Acme")
            .revenue("$1.5M")
            .our_contact("c-1")
            .our_contact("c-2")
            .client_contact("c-9")
            .sow("sow-4")
            .entry("2026-01-05", "Discovery", 1500.0)
            .entry("2026-01-12", "Proposal", 2500.0)
            .build();

        assert_eq!(lead.client_org_name, "Acme");
        assert_eq!(lead.revenue_estimate, "$1.5M");
        assert_eq!(lead.our_side_contacts.len(), 2);
        assert_eq!(lead.client_side_contacts.len(), 1);
        assert_eq!(lead.sow_id, Some(SowId::from_string("sow-4")));
        assert_eq!(lead.entry_cost(), 4000.0);
    }
}
