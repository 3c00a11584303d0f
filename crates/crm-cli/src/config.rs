//! File locations and environment overrides.
//!
//! ```text
//! ~/.crm-dashboard/
//! ├── dataset.json   # contacts, leads, SOWs, projects, employees, updates
//! └── .env.local     # optional environment overrides
//! ```
//!
//! # Environment Variables
//!
//! - `CRM_STATE_DIR`: Override the base directory
//! - `CRM_DATA_FILE`: Override the dataset file
//! - `CRM_PERIOD`: Reporting period (`YYYY-MM`) for deliverable counts

use std::path::PathBuf;

/// Environment variable for custom state directory.
pub const STATE_DIR_ENV: &str = "CRM_STATE_DIR";

/// Environment variable for custom dataset file.
pub const DATA_FILE_ENV: &str = "CRM_DATA_FILE";

/// Environment variable for the reporting period.
pub const PERIOD_ENV: &str = "CRM_PERIOD";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".crm-dashboard";

const DATA_FILE_NAME: &str = "dataset.json";

/// Get the state directory.
///
/// 1. `CRM_STATE_DIR` if set
/// 2. `~/.crm-dashboard` if the home directory is known
/// 3. `.crm-dashboard` in the current directory
pub fn state_dir() -> PathBuf {
    std::env::var(STATE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(DEFAULT_STATE_DIR))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
        })
}

/// Default dataset file when neither `--data` nor `CRM_DATA_FILE` is given.
pub fn default_data_file() -> PathBuf {
    state_dir().join(DATA_FILE_NAME)
}

/// Optional `.env.local` inside the state directory.
pub fn env_file() -> PathBuf {
    state_dir().join(".env.local")
}
