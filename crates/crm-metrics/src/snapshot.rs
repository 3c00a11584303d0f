//! Snapshot assembly.

use crm_models::{Contact, Dataset, Employee, Lead, Project, Sow};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::directors::{self, DirectorMetrics};
use crate::fold::{self, EmployeeSummary, LeadSummary, ProjectSummary, SowSummary};
use crate::period::Period;
use crate::warnings::{IngestWarning, Warnings};

/// Top-line figures and per-unit ratios, in thousands of dollars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    pub total_revenue: f64,
    /// Employee cost plus lead cost plus SOW cost.
    pub total_cost: f64,
    pub total_income: f64,
    pub cost_per_sow: f64,
    pub cost_per_employee: f64,
    pub revenue_per_employee: f64,
    pub cost_per_benched_employee: f64,
}

/// Everything the dashboard shows, derived from one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub period: Period,
    pub revenue: RevenueSummary,
    pub leads: LeadSummary,
    pub sows: SowSummary,
    pub projects: ProjectSummary,
    pub employees: EmployeeSummary,
    pub directors: Vec<DirectorMetrics>,
    /// Money fields that could not be read. Any affected total is `NaN`.
    pub warnings: Vec<IngestWarning>,
}

impl Metrics {
    /// Returns true if every money field parsed.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Divides by `count`, treating an empty group as a group of one.
fn per_unit(total: f64, count: usize) -> f64 {
    total / count.max(1) as f64
}

/// Derives [`Metrics`] from the dashboard collections.
///
/// Holds only the reporting period; every call recomputes from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsAggregator {
    period: Period,
}

impl MetricsAggregator {
    pub fn new(period: Period) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Aggregates a whole dataset.
    pub fn aggregate(&self, dataset: &Dataset) -> Metrics {
        self.aggregate_parts(
            &dataset.contacts,
            &dataset.leads,
            &dataset.sows,
            &dataset.projects,
            &dataset.employees,
        )
    }

    /// Aggregates individually owned collections.
    pub fn aggregate_parts(
        &self,
        contacts: &[Contact],
        leads: &[Lead],
        sows: &[Sow],
        projects: &[Project],
        employees: &[Employee],
    ) -> Metrics {
        let mut warnings = Warnings::default();

        let sow_summary = fold::sow::fold(sows, &mut warnings);
        let lead_summary = fold::lead::fold(leads);
        let employee_summary = fold::employee::fold(employees, &mut warnings);
        let project_summary = fold::project::fold(projects, self.period);
        let directors = directors::roll_up(contacts, leads, &mut warnings);

        let total_revenue = sow_summary.total_sow_revenue;
        let total_cost = employee_summary.employee_cost
            + lead_summary.lead_total_cost
            + sow_summary.total_sow_cost;

        let revenue = RevenueSummary {
            total_revenue,
            total_cost,
            total_income: total_revenue - total_cost,
            cost_per_sow: per_unit(sow_summary.total_sow_cost, sow_summary.active_sows_count),
            cost_per_employee: per_unit(
                employee_summary.employee_cost,
                employee_summary.current_employees,
            ),
            revenue_per_employee: per_unit(
                employee_summary.employee_revenue,
                employee_summary.current_employees,
            ),
            cost_per_benched_employee: per_unit(
                employee_summary.employee_cost,
                employee_summary.benched_employees,
            ),
        };
        debug!(?revenue, "assembled revenue summary");

        let warnings = warnings.into_vec();
        info!(
            period = %self.period,
            directors = directors.len(),
            warnings = warnings.len(),
            "computed dashboard metrics"
        );

        Metrics {
            period: self.period,
            revenue,
            leads: lead_summary,
            sows: sow_summary,
            projects: project_summary,
            employees: employee_summary,
            directors,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_unit_guards_empty_group() {
        assert_eq!(per_unit(500.0, 0), 500.0);
        assert_eq!(per_unit(500.0, 4), 125.0);
    }

    #[test]
    fn test_empty_dataset_is_finite() {
        let agg = MetricsAggregator::new("2026-02".parse().unwrap());
        let m = agg.aggregate(&Dataset::default());

        assert_eq!(m.revenue, RevenueSummary::default());
        assert!(m.directors.is_empty());
        assert!(m.is_clean());
        assert_eq!(m.period.to_string(), "2026-02");
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let agg = MetricsAggregator::new("2026-02".parse().unwrap());
        let json = serde_json::to_value(agg.aggregate(&Dataset::default())).unwrap();

        assert_eq!(json["period"], "2026-02");
        assert!(json["revenue"].get("totalIncome").is_some());
        assert!(json["sows"]["sowsByPhase"].get("In Progress").is_some());
        assert!(json["projects"]["projectsByStatus"].get("Green").is_some());
    }
}
