//! Project health, headcount and client spread.

use crm_models::{Project, ProjectPhase, ProjectStatus};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

use crate::period::Period;

/// Estimated headcount of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHeadcount {
    pub project_name: String,
    pub employees: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    /// Projects not yet canceled or completed.
    pub total_projects: usize,
    /// Health across all projects, whatever their phase.
    pub projects_by_status: BTreeMap<ProjectStatus, usize>,
    /// In input order.
    pub employees_per_project: Vec<ProjectHeadcount>,
    pub projects_per_client: BTreeMap<String, usize>,
    /// In Progress projects releasing within the reporting period.
    pub deliverables_this_period: usize,
}

/// Adds up every integer in a team-size string: "5 devs, 2 QA" → 7.
///
/// Runs of digits too long for `u64` saturate.
pub fn team_headcount(team_size: &str) -> u64 {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let number = NUMBER.get_or_init(|| Regex::new(r"\d+").unwrap());
    number
        .find_iter(team_size)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .fold(0, u64::saturating_add)
}

pub(crate) fn fold(projects: &[Project], period: Period) -> ProjectSummary {
    let mut summary = ProjectSummary {
        projects_by_status: ProjectStatus::ALL.iter().map(|s| (*s, 0)).collect(),
        ..Default::default()
    };

    for project in projects {
        if project.phase.is_current() {
            summary.total_projects += 1;
        }
        *summary.projects_by_status.entry(project.status).or_default() += 1;
        summary.employees_per_project.push(ProjectHeadcount {
            project_name: project.project_name.clone(),
            employees: team_headcount(&project.team_size),
        });
        *summary
            .projects_per_client
            .entry(project.org_name.clone())
            .or_default() += 1;
        if project.phase == ProjectPhase::InProgress && period.contains(&project.release_date) {
            summary.deliverables_this_period += 1;
        }
    }

    debug!(
        projects = projects.len(),
        current = summary.total_projects,
        deliverables = summary.deliverables_this_period,
        %period,
        "folded projects"
    );

    summary
}
