//! Dataset file store.

use std::path::{Path, PathBuf};

use crm_models::Dataset;
use tracing::info;

use crate::atomic::{atomic_write_json, read_json};
use crate::error::{PersistenceError, Result};

/// Reads and writes a whole `Dataset` as one JSON document.
///
/// ```text
/// dataset.json
/// {
///   "contacts": [...],
///   "leads": [...],
///   "sows": [...],
///   "projects": [...],
///   "employees": [...],
///   "updates": [...]
/// }
/// ```
pub struct DatasetStore {
    path: PathBuf,
}

impl DatasetStore {
    /// Creates a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the dataset, failing if the file is missing.
    pub fn load(&self) -> Result<Dataset> {
        if !self.exists() {
            return Err(PersistenceError::NotFound(self.path.clone()));
        }
        let dataset: Dataset = read_json(&self.path)?;
        info!(
            path = %self.path.display(),
            contacts = dataset.contacts.len(),
            leads = dataset.leads.len(),
            sows = dataset.sows.len(),
            projects = dataset.projects.len(),
            employees = dataset.employees.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Loads the dataset, or an empty one if the file is missing.
    pub fn load_or_default(&self) -> Result<Dataset> {
        if !self.exists() {
            return Ok(Dataset::default());
        }
        self.load()
    }

    /// Replaces the file contents with `dataset`.
    pub fn save(&self, dataset: &Dataset) -> Result<()> {
        atomic_write_json(&self.path, dataset)
    }

    /// Writes an empty dataset. Refuses to clobber an existing file unless
    /// `force` is set.
    pub fn init(&self, force: bool) -> Result<()> {
        if self.exists() && !force {
            return Err(PersistenceError::AlreadyExists(self.path.clone()));
        }
        self.save(&Dataset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_models::{Contact, Employee, Lead, LeadPhase, Sow, SowPhase};
    use tempfile::tempdir;

    fn sample() -> Dataset {
        let mut ds = Dataset::new();
        ds.contacts.push(Contact::new("c-1", "Ann Park", "Us", "VP Sales"));
        ds.leads.push(
            Lead::builder("lead-1", "Expansion", LeadPhase::Proposal)
                .our_contact("c-1")
                .revenue("$250K")
                .build(),
        );
        ds.sows
            .push(Sow::new("sow-1", "Platform", SowPhase::Won, "$2.26M"));
        ds.employees
            .push(Employee::new("r-1", "Maya", "$100K", "$150K").with_accounts("Acme"));
        ds
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let store = DatasetStore::new(dir.path().join("dataset.json"));
        let ds = sample();

        store.save(&ds).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, ds);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let store = DatasetStore::new(dir.path().join("nope.json"));

        assert!(matches!(store.load(), Err(PersistenceError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_missing() {
        let dir = tempdir().unwrap();
        let store = DatasetStore::new(dir.path().join("nope.json"));

        assert!(store.load_or_default().unwrap().is_empty());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let store = DatasetStore::new(dir.path().join("dataset.json"));
        store.save(&sample()).unwrap();

        assert!(matches!(
            store.init(false),
            Err(PersistenceError::AlreadyExists(_))
        ));
        assert!(!store.load().unwrap().is_empty());

        store.init(true).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_phase_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(
            &path,
            r#"{"sows":[{"id":"sow-1","sowName":"X","phase":"Paused","value":"$1K"}]}"#,
        )
        .unwrap();

        let store = DatasetStore::new(path);
        assert!(matches!(
            store.load(),
            Err(PersistenceError::SerializeError(_))
        ));
    }
}
