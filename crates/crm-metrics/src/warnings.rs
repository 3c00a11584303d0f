//! Side channel for values that could not be parsed.
//!
//! Totals still go `NaN` when a record carries garbage, but each offending
//! field is also recorded here so a caller can tell "zero" from "unreadable".

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::money::try_parse_money;

/// Which collection a warning came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Sow,
    Lead,
    Employee,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::Sow => "sow",
            RecordKind::Lead => "lead",
            RecordKind::Employee => "employee",
        })
    }
}

/// One unparseable money field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestWarning {
    pub kind: RecordKind,
    pub record_id: String,
    pub field: String,
    pub raw_value: String,
}

impl fmt::Display for IngestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} = {:?} is not a money value",
            self.kind, self.record_id, self.field, self.raw_value
        )
    }
}

/// Collects warnings during one aggregation pass.
#[derive(Debug, Default)]
pub(crate) struct Warnings(Vec<IngestWarning>);

impl Warnings {
    /// Parses `raw` as money, recording a warning and returning `NaN` on failure.
    pub(crate) fn money(
        &mut self,
        kind: RecordKind,
        record_id: &str,
        field: &'static str,
        raw: &str,
    ) -> f64 {
        match try_parse_money(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(kind = %kind, record_id, field, error = %e, "unparseable money value");
                self.0.push(IngestWarning {
                    kind,
                    record_id: record_id.to_string(),
                    field: field.to_string(),
                    raw_value: raw.to_string(),
                });
                f64::NAN
            }
        }
    }

    pub(crate) fn into_vec(self) -> Vec<IngestWarning> {
        self.0
    }
}
