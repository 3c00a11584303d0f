//! SOW revenue and per-phase cost.

use crm_models::{CostBearing, Sow, SowPhase};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::{total_cost, totals_by_phase, PhaseTotals};
use crate::warnings::{RecordKind, Warnings};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SowSummary {
    /// Contract value of In Progress and Won SOWs, in thousands.
    pub total_sow_revenue: f64,
    pub active_sows_count: usize,
    /// Entry cost over every SOW regardless of phase.
    pub total_sow_cost: f64,
    pub sows_by_phase: BTreeMap<SowPhase, PhaseTotals>,
}

pub(crate) fn fold(sows: &[Sow], warnings: &mut Warnings) -> SowSummary {
    let mut total_sow_revenue = 0.0;
    let mut active_sows_count = 0;
    for sow in sows.iter().filter(|s| s.phase.is_active()) {
        total_sow_revenue += warnings.money(RecordKind::Sow, sow.id.as_str(), "value", &sow.value);
        active_sows_count += 1;
    }

    let sows_by_phase = totals_by_phase(
        &SowPhase::ALL,
        sows.iter().map(|s| (s.phase, s.entry_cost())),
    );
    let total_sow_cost = total_cost(&sows_by_phase);

    debug!(
        sows = sows.len(),
        active = active_sows_count,
        revenue = total_sow_revenue,
        cost = total_sow_cost,
        "folded sows"
    );

    SowSummary {
        total_sow_revenue,
        active_sows_count,
        total_sow_cost,
        sows_by_phase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_models::Entry;

    fn sow(id: &str, phase: SowPhase, value: &str, costs: &[f64]) -> Sow {
        costs.iter().fold(Sow::new(id, id, phase, value), |s, c| {
            s.with_entry(Entry::new("2026-01-01", "work", *c))
        })
    }

    #[test]
    fn test_revenue_counts_active_only() {
        let sows = vec![
            sow("a", SowPhase::Won, "$500K", &[]),
            sow("b", SowPhase::InProgress, "$1.5M", &[]),
            sow("c", SowPhase::Lead, "$900K", &[]),
            sow("d", SowPhase::Completed, "$300K", &[]),
        ];
        let summary = fold(&sows, &mut Warnings::default());

        assert_eq!(summary.total_sow_revenue, 2000.0);
        assert_eq!(summary.active_sows_count, 2);
    }

    #[test]
    fn test_cost_grouped_for_every_phase() {
        let sows = vec![
            sow("a", SowPhase::Won, "$500K", &[300.0, 200.0]),
            sow("b", SowPhase::Completed, "garbage", &[50.0]),
        ];
        let summary = fold(&sows, &mut Warnings::default());

        assert_eq!(summary.sows_by_phase.len(), 4);
        assert_eq!(
            summary.sows_by_phase[&SowPhase::Won],
            PhaseTotals { count: 1, cost: 500.0 }
        );
        assert_eq!(
            summary.sows_by_phase[&SowPhase::Completed],
            PhaseTotals { count: 1, cost: 50.0 }
        );
        assert_eq!(summary.sows_by_phase[&SowPhase::Lead].count, 0);
        assert_eq!(summary.total_sow_cost, 550.0);
    }

    #[test]
    fn test_inactive_garbage_value_is_ignored() {
        let sows = vec![sow("a", SowPhase::Lead, "TBD", &[])];
        let mut warnings = Warnings::default();
        let summary = fold(&sows, &mut warnings);

        assert_eq!(summary.total_sow_revenue, 0.0);
        assert!(warnings.into_vec().is_empty());
    }

    #[test]
    fn test_active_garbage_value_poisons_revenue() {
        let sows = vec![
            sow("a", SowPhase::Won, "$500K", &[]),
            sow("b", SowPhase::Won, "TBD", &[]),
        ];
        let mut warnings = Warnings::default();
        let summary = fold(&sows, &mut warnings);

        assert!(summary.total_sow_revenue.is_nan());
        assert_eq!(warnings.into_vec().len(), 1);
    }
}
