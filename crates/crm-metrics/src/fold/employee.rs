//! Payroll cost, billed value and bench counts.

use crm_models::Employee;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::warnings::{RecordKind, Warnings};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    /// Everyone ever hired, including leavers.
    pub total_hired: usize,
    pub current_employees: usize,
    pub benched_employees: usize,
    /// Summed salary of current employees, in thousands.
    pub employee_cost: f64,
    /// Summed SOW valuation of current employees, in thousands.
    pub employee_revenue: f64,
    /// Client account name to number of current employees on it.
    pub employees_per_client: BTreeMap<String, usize>,
}

pub(crate) fn fold(employees: &[Employee], warnings: &mut Warnings) -> EmployeeSummary {
    let mut summary = EmployeeSummary {
        total_hired: employees.len(),
        ..Default::default()
    };

    for emp in employees.iter().filter(|e| e.is_current()) {
        summary.current_employees += 1;
        if emp.is_benched() {
            summary.benched_employees += 1;
        }
        summary.employee_cost +=
            warnings.money(RecordKind::Employee, emp.id.as_str(), "salary", &emp.salary);
        summary.employee_revenue += warnings.money(
            RecordKind::Employee,
            emp.id.as_str(),
            "sowValuation",
            &emp.sow_valuation,
        );
        for account in emp.client_accounts() {
            *summary
                .employees_per_client
                .entry(account.to_string())
                .or_default() += 1;
        }
    }

    debug!(
        hired = summary.total_hired,
        current = summary.current_employees,
        benched = summary.benched_employees,
        clients = summary.employees_per_client.len(),
        "folded employees"
    );

    summary
}
