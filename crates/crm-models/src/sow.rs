//! Statements of work.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entry::{CostBearing, Entry};
use crate::ids::{EmployeeId, SowId};

/// Lifecycle phase of a SOW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum SowPhase {
    #[default]
    Lead,
    #[serde(rename = "In Progress")]
    InProgress,
    Won,
    Completed,
}

impl SowPhase {
    /// Every phase, in board order.
    pub const ALL: [SowPhase; 4] = [
        SowPhase::Lead,
        SowPhase::InProgress,
        SowPhase::Won,
        SowPhase::Completed,
    ];

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SowPhase::Lead => "Lead",
            SowPhase::InProgress => "In Progress",
            SowPhase::Won => "Won",
            SowPhase::Completed => "Completed",
        }
    }

    /// Active SOWs are the ones currently earning revenue.
    pub fn is_active(&self) -> bool {
        matches!(self, SowPhase::InProgress | SowPhase::Won)
    }
}

impl fmt::Display for SowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format of the signed contract document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    #[default]
    Pdf,
    Docx,
}

/// A contracted engagement with a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sow {
    pub id: SowId,
    pub sow_name: String,
    #[serde(default)]
    pub client: String,
    pub phase: SowPhase,
    /// Free-text contract value, e.g. "$2.26M".
    pub value: String,
    #[serde(default)]
    pub revenue: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub signed_date: String,
    #[serde(default)]
    pub expiry_date: String,
    /// Number of our people staffed on the SOW.
    #[serde(default, rename = "alethaResources")]
    pub our_resources: u32,
    #[serde(default)]
    pub employee_ids: Vec<EmployeeId>,
    #[serde(default)]
    pub client_poc_name: String,
    #[serde(default)]
    pub client_pm_name: String,
    #[serde(default)]
    pub our_resource_manager: String,
    #[serde(default)]
    pub managers: String,
    #[serde(default)]
    pub file_type: FileType,
    #[serde(default)]
    pub contract_link: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Sow {
    /// Creates a SOW with the given phase and contract value.
    pub fn new(
        id: impl Into<SowId>,
        sow_name: impl Into<String>,
        phase: SowPhase,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sow_name: sow_name.into(),
            client: String::new(),
            phase,
            value: value.into(),
            revenue: String::new(),
            start_date: String::new(),
            signed_date: String::new(),
            expiry_date: String::new(),
            our_resources: 0,
            employee_ids: Vec::new(),
            client_poc_name: String::new(),
            client_pm_name: String::new(),
            our_resource_manager: String::new(),
            managers: String::new(),
            file_type: FileType::Pdf,
            contract_link: String::new(),
            entries: Vec::new(),
        }
    }

    /// Appends a timeline entry.
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }
}

impl CostBearing for Sow {
    fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
