//! Dashboard metrics for the CRM.
//!
//! This crate folds the five dashboard collections into a single
//! [`Metrics`] snapshot:
//! - per-collection folds (SOW revenue and phase cost, lead pipeline,
//!   payroll and bench, project health and headcount)
//! - the director roll-up, joining leadership contacts to the leads they
//!   work from our side
//! - top-line totals and per-unit ratios
//!
//! Aggregation is a pure function of its inputs. Money arrives as display
//! text and is read in thousands of dollars; fields that fail to parse turn
//! the affected totals into `NaN` and are listed in [`Metrics::warnings`].
//!
//! # Example
//!
//! ```
//! use crm_metrics::{MetricsAggregator, Period};
//! use crm_models::{Dataset, Sow, SowPhase};
//!
//! let mut dataset = Dataset::new();
//! dataset.sows.push(Sow::new("sow-1", "Platform", SowPhase::Won, "$2.26M"));
//!
//! let period: Period = "2026-02".parse().unwrap();
//! let metrics = MetricsAggregator::new(period).aggregate(&dataset);
//! assert_eq!(metrics.sows.active_sows_count, 1);
//! ```

pub mod activity;
pub mod directors;
pub mod error;
pub mod fold;
pub mod money;
pub mod period;
pub mod snapshot;
pub mod warnings;

pub use activity::ActivityFeed;
pub use directors::{DirectorLead, DirectorMetrics};
pub use error::{MetricsError, Result};
pub use fold::{
    EmployeeSummary, LeadSummary, PhaseTotals, ProjectHeadcount, ProjectSummary, SowSummary,
};
pub use money::{format_millions, format_thousands, parse_money, try_parse_money};
pub use period::Period;
pub use snapshot::{Metrics, MetricsAggregator, RevenueSummary};
pub use warnings::{IngestWarning, RecordKind};
