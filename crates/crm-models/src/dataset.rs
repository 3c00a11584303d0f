//! The full set of collections the dashboard works from.

use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::employee::Employee;
use crate::entry::UpdateEntry;
use crate::lead::Lead;
use crate::project::Project;
use crate::sow::Sow;

/// Every collection the dashboard renders, owned in one place.
///
/// Edits replace the relevant collection in full; derived metrics are
/// recomputed from the new value rather than patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub contacts: Vec<Contact>,
    pub leads: Vec<Lead>,
    pub sows: Vec<Sow>,
    pub projects: Vec<Project>,
    pub employees: Vec<Employee>,
    /// Most recent first.
    pub updates: Vec<UpdateEntry>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
            && self.leads.is_empty()
            && self.sows.is_empty()
            && self.projects.is_empty()
            && self.employees.is_empty()
            && self.updates.is_empty()
    }

    /// Records an update at the head of the feed.
    pub fn record_update(&mut self, update: UpdateEntry) {
        self.updates.insert(0, update);
    }
}
