//! Core data models for the CRM dashboard.
//!
//! This crate provides the record types the dashboard works from: contacts,
//! leads, statements of work, projects and employees, plus the activity
//! feed and the `Dataset` bundle that owns them all.

pub mod builders;
pub mod contact;
pub mod dataset;
pub mod employee;
pub mod entry;
pub mod ids;
pub mod lead;
pub mod project;
pub mod sow;

// Re-export main types
pub use builders::LeadBuilder;
pub use contact::{Contact, ContactProfile, LEADERSHIP_KEYWORDS};
pub use dataset::Dataset;
pub use employee::{
    BenchPeriod, Employee, SowAssignment, BENCH_MARKER, NOT_APPLICABLE_MARKER, ZERO_BENCH_TIMES,
};
pub use entry::{CostBearing, Entry, UpdateEntry};
pub use ids::{ContactId, EmployeeId, EntryId, LeadId, ProjectId, SowId, UpdateId};
pub use lead::{Lead, LeadPhase};
pub use project::{Project, ProjectPhase, ProjectStatus};
pub use sow::{FileType, Sow, SowPhase};
