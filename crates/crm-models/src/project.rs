//! Delivery projects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{EmployeeId, ProjectId};

/// Lifecycle phase of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum ProjectPhase {
    #[default]
    Planning,
    Financed,
    #[serde(rename = "In Progress")]
    InProgress,
    Canceled,
    Completed,
}

impl ProjectPhase {
    /// Every phase, in board order.
    pub const ALL: [ProjectPhase; 5] = [
        ProjectPhase::Planning,
        ProjectPhase::Financed,
        ProjectPhase::InProgress,
        ProjectPhase::Canceled,
        ProjectPhase::Completed,
    ];

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectPhase::Planning => "Planning",
            ProjectPhase::Financed => "Financed",
            ProjectPhase::InProgress => "In Progress",
            ProjectPhase::Canceled => "Canceled",
            ProjectPhase::Completed => "Completed",
        }
    }

    /// Returns true unless the project has been closed out.
    pub fn is_current(&self) -> bool {
        !matches!(self, ProjectPhase::Canceled | ProjectPhase::Completed)
    }
}

impl fmt::Display for ProjectPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traffic-light health of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    #[default]
    Green,
    Yellow,
    Red,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Green,
        ProjectStatus::Yellow,
        ProjectStatus::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Green => "Green",
            ProjectStatus::Yellow => "Yellow",
            ProjectStatus::Red => "Red",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A delivery project for a client organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub org_name: String,
    pub project_name: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub contact_name: String,
    pub phase: ProjectPhase,
    #[serde(default)]
    pub start_date: String,
    /// `YYYY-MM-DD`, compared by prefix against the reporting period.
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub pm_name: String,
    #[serde(default)]
    pub budget: String,
    /// Free text such as "5 devs, 2 QA, 1 PM".
    #[serde(default)]
    pub team_size: String,
    #[serde(default)]
    pub employee_ids: Vec<EmployeeId>,
    #[serde(default)]
    pub vendors: Vec<String>,
    #[serde(default)]
    pub external_teams: Vec<String>,
}

impl Project {
    /// Creates a project owned by `org_name`.
    pub fn new(
        id: impl Into<ProjectId>,
        org_name: impl Into<String>,
        project_name: impl Into<String>,
        phase: ProjectPhase,
        status: ProjectStatus,
    ) -> Self {
        Self {
            id: id.into(),
            org_name: org_name.into(),
            project_name: project_name.into(),
            status,
            contact_name: String::new(),
            phase,
            start_date: String::new(),
            release_date: String::new(),
            pm_name: String::new(),
            budget: String::new(),
            team_size: String::new(),
            employee_ids: Vec::new(),
            vendors: Vec::new(),
            external_teams: Vec::new(),
        }
    }

    /// Sets the team size text.
    pub fn with_team_size(mut self, team_size: impl Into<String>) -> Self {
        self.team_size = team_size.into();
        self
    }

    /// Sets the release date.
    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = release_date.into();
        self
    }

}
