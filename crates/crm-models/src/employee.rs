//! Employee (resource) records.

use serde::{Deserialize, Serialize};

use crate::ids::{EmployeeId, SowId};

/// Marker used in `current_accounts` for an unassigned employee.
pub const BENCH_MARKER: &str = "bench";

/// Marker used in `current_accounts` when no account applies.
pub const NOT_APPLICABLE_MARKER: &str = "n/a";

/// Bench-time descriptors that mean "never benched".
pub const ZERO_BENCH_TIMES: &[&str] = &["0 weeks", "0 months"];

/// Time window of an employee on a SOW.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SowAssignment {
    pub sow_id: SowId,
    pub sow_name: String,
    pub start_date: String,
    /// A date, or "Present" for an open assignment.
    pub end_date: String,
}

/// Time window an employee spent without an assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchPeriod {
    pub id: String,
    pub start_date: String,
    pub end_date: String,
}

/// Someone on our payroll, past or present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    /// Payroll number such as "EMP-1004".
    #[serde(default)]
    pub employee_id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    /// Comma-separated client names, or the bench marker.
    #[serde(default)]
    pub current_accounts: String,
    #[serde(default)]
    pub start_date: String,
    /// e.g. "0 weeks", "3 months".
    #[serde(default)]
    pub bench_time: String,
    /// Free-text money, e.g. "$120K".
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub resume_link: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    /// Free-text money billed against SOWs.
    #[serde(default)]
    pub sow_valuation: String,
    #[serde(default)]
    pub benefit_to_date: String,
    #[serde(default)]
    pub benefit_recent: String,
    #[serde(default)]
    pub has_left: bool,
    #[serde(default)]
    pub sow_assignments: Vec<SowAssignment>,
    #[serde(default)]
    pub bench_periods: Vec<BenchPeriod>,
}

impl Employee {
    /// Creates a current employee with no accounts and zero bench time.
    pub fn new(
        id: impl Into<EmployeeId>,
        name: impl Into<String>,
        salary: impl Into<String>,
        sow_valuation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: String::new(),
            name: name.into(),
            title: String::new(),
            current_accounts: String::new(),
            start_date: String::new(),
            bench_time: ZERO_BENCH_TIMES[0].to_string(),
            salary: salary.into(),
            resume_link: String::new(),
            email: String::new(),
            address: String::new(),
            sow_valuation: sow_valuation.into(),
            benefit_to_date: String::new(),
            benefit_recent: String::new(),
            has_left: false,
            sow_assignments: Vec::new(),
            bench_periods: Vec::new(),
        }
    }

    /// Sets the current accounts text.
    pub fn with_accounts(mut self, accounts: impl Into<String>) -> Self {
        self.current_accounts = accounts.into();
        self
    }

    /// Sets the bench-time descriptor.
    pub fn with_bench_time(mut self, bench_time: impl Into<String>) -> Self {
        self.bench_time = bench_time.into();
        self
    }

    /// Marks the employee as departed.
    pub fn departed(mut self) -> Self {
        self.has_left = true;
        self
    }

    /// Returns true while the employee is still on payroll.
    pub fn is_current(&self) -> bool {
        !self.has_left
    }

    /// Benched if the accounts mention the bench or any bench time is logged.
    pub fn is_benched(&self) -> bool {
        self.current_accounts.to_lowercase().contains(BENCH_MARKER)
            || !ZERO_BENCH_TIMES.contains(&self.bench_time.as_str())
    }

    /// Client account names, trimmed, without bench or n/a markers.
    pub fn client_accounts(&self) -> impl Iterator<Item = &str> {
        self.current_accounts
            .split(',')
            .map(str::trim)
            .filter(|account| {
                let lower = account.to_lowercase();
                !account.is_empty() && lower != BENCH_MARKER && lower != NOT_APPLICABLE_MARKER
            })
    }
}
