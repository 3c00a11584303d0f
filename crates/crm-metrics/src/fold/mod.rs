//! Single-pass reductions over one collection each.
//!
//! The folds are independent of one another; snapshot assembly combines
//! their outputs.

pub mod employee;
pub mod lead;
pub mod project;
pub mod sow;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use employee::EmployeeSummary;
pub use lead::LeadSummary;
pub use project::{ProjectHeadcount, ProjectSummary};
pub use sow::SowSummary;

/// Record count and summed entry cost for one phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseTotals {
    pub count: usize,
    pub cost: f64,
}

impl PhaseTotals {
    fn add(&mut self, cost: f64) {
        self.count += 1;
        self.cost += cost;
    }
}

/// Groups `(phase, cost)` pairs, with every phase in `phases` present even
/// when nothing falls into it.
fn totals_by_phase<P, I>(phases: &[P], items: I) -> BTreeMap<P, PhaseTotals>
where
    P: Ord + Copy,
    I: IntoIterator<Item = (P, f64)>,
{
    let mut by_phase: BTreeMap<P, PhaseTotals> =
        phases.iter().map(|p| (*p, PhaseTotals::default())).collect();
    for (phase, cost) in items {
        by_phase.entry(phase).or_default().add(cost);
    }
    by_phase
}

/// Sum of costs across all phases.
fn total_cost<P>(by_phase: &BTreeMap<P, PhaseTotals>) -> f64 {
    by_phase.values().map(|t| t.cost).sum()
}
