//! Timeline entries and activity records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{EntryId, UpdateId};

/// A dated note attached to a contact, lead or SOW.
///
/// `cost` is already numeric and non-negative; it never goes through the
/// free-text money parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub date: String,
    pub text: String,
    #[serde(default)]
    pub cost: f64,
}

impl Entry {
    /// Creates an entry with a fresh ID.
    pub fn new(date: impl Into<String>, text: impl Into<String>, cost: f64) -> Self {
        Self {
            id: EntryId::new(),
            date: date.into(),
            text: text.into(),
            cost,
        }
    }
}

/// Records that carry a cost-bearing timeline.
pub trait CostBearing {
    /// Returns the record's timeline entries.
    fn entries(&self) -> &[Entry];

    /// Sum of the `cost` field over all entries.
    fn entry_cost(&self) -> f64 {
        self.entries().iter().map(|e| e.cost).sum()
    }
}

/// One line of the dashboard's "recent updates" feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntry {
    pub id: UpdateId,
    pub timestamp: DateTime<Utc>,
    pub user: String,
    /// Dashboard section the card lives in (`leads`, `sow`, ...).
    pub section: String,
    pub card_id: String,
    pub card_title: String,
    /// Past-tense verb, e.g. "updated" or "commented on".
    pub action: String,
}

impl UpdateEntry {
    /// Creates an update stamped with the current time.
    pub fn new(
        user: impl Into<String>,
        section: impl Into<String>,
        card_id: impl Into<String>,
        card_title: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            id: UpdateId::new(),
            timestamp: Utc::now(),
            user: user.into(),
            section: section.into(),
            card_id: card_id.into(),
            card_title: card_title.into(),
            action: action.into(),
        }
    }

    /// Human-readable one-line summary, e.g. `Dana updated "Acme Rollout"`.
    pub fn summary(&self) -> String {
        format!("{} {} \"{}\"", self.user, self.action, self.card_title)
    }
}
