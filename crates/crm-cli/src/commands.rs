//! Command handlers for CLI subcommands.

use std::path::Path;

use crm_metrics::{ActivityFeed, MetricsAggregator, Period};
use crm_persistence::DatasetStore;
use tracing::{info, warn};

use crate::cli::{Commands, OutputFormat};
use crate::render;

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command against the dataset at `data_file`.
pub fn execute(command: Commands, data_file: &Path) -> Result<()> {
    let store = DatasetStore::new(data_file);
    let output = match command {
        Commands::Metrics { period, format } => {
            cmd_metrics(&store, period.unwrap_or_else(Period::current), format)?
        }
        Commands::Directors { format } => cmd_directors(&store, format)?,
        Commands::Updates { limit, format } => cmd_updates(&store, limit, format)?,
        Commands::Init { force } => cmd_init(&store, force)?,
    };
    print!("{}", output);
    Ok(())
}

fn cmd_metrics(store: &DatasetStore, period: Period, format: OutputFormat) -> Result<String> {
    let dataset = store.load()?;
    let metrics = MetricsAggregator::new(period).aggregate(&dataset);

    if !metrics.is_clean() {
        warn!(
            count = metrics.warnings.len(),
            "some money values could not be parsed; affected totals are NaN"
        );
    }

    Ok(match format {
        OutputFormat::Table => render::metrics_table(&metrics),
        // NaN totals serialize as null.
        OutputFormat::Json => serde_json::to_string_pretty(&metrics)? + "\n",
        OutputFormat::Brief => render::metrics_brief(&metrics) + "\n",
    })
}

fn cmd_directors(store: &DatasetStore, format: OutputFormat) -> Result<String> {
    let dataset = store.load()?;
    // The roll-up does not depend on the period.
    let metrics = MetricsAggregator::new(Period::current()).aggregate(&dataset);

    Ok(match format {
        OutputFormat::Table => render::directors_table(&metrics.directors),
        OutputFormat::Json => serde_json::to_string_pretty(&metrics.directors)? + "\n",
        OutputFormat::Brief => {
            let brief = render::directors_brief(&metrics.directors);
            if brief.is_empty() {
                brief
            } else {
                brief + "\n"
            }
        }
    })
}

fn cmd_updates(store: &DatasetStore, limit: usize, format: OutputFormat) -> Result<String> {
    let dataset = store.load()?;
    let feed = ActivityFeed::with_limit(&dataset.updates, limit);

    Ok(match format {
        OutputFormat::Table => render::updates_table(feed.visible(), feed.remaining()),
        OutputFormat::Json => serde_json::to_string_pretty(feed.visible())? + "\n",
        OutputFormat::Brief => feed
            .visible()
            .iter()
            .map(|u| format!("{}\t{}\n", u.id, u.summary()))
            .collect(),
    })
}

fn cmd_init(store: &DatasetStore, force: bool) -> Result<String> {
    store.init(force)?;
    info!(path = %store.path().display(), force, "initialized dataset");
    Ok(format!("Initialized empty dataset at {}\n", store.path().display()))
}
