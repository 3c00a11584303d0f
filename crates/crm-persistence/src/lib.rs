//! Persistence layer for the CRM dashboard.
//!
//! A dataset lives in a single JSON file. Writes go through a temp file and
//! a rename so a crash never leaves a half-written dataset behind.
//!
//! # Example
//!
//! ```no_run
//! use crm_persistence::DatasetStore;
//!
//! let store = DatasetStore::new("/home/user/.crm-dashboard/dataset.json");
//! let mut dataset = store.load_or_default().unwrap();
//! dataset.projects.clear();
//! store.save(&dataset).unwrap();
//! ```

pub mod atomic;
pub mod dataset_store;
pub mod error;

pub use dataset_store::DatasetStore;
pub use error::{PersistenceError, Result};
