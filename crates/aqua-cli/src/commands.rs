use std::path::PathBuf;

use anyhow::{Context, Result};
use aqua_core::{CleaningConfig, CleaningOutcome, CleaningPipeline, EventIdPolicy};
use aqua_ingest::{ReadOptions, read_csv_table};
use aqua_map::ColumnOverride;
use aqua_model::DatasetKind;
use aqua_output::write_csv_file;
use aqua_standards::RegionTable;
use tracing::{info, info_span};

use crate::cli::Cli;

/// Everything one `aqua-clean` invocation needs.
#[derive(Debug, Clone, Default)]
pub struct CleanRequest {
    pub input: PathBuf,
    pub kind: String,
    pub overrides: Vec<ColumnOverride>,
    pub regions: Option<PathBuf>,
    pub strict_event_ids: bool,
    pub event_id_pattern: Option<String>,
    pub csv_out: Option<PathBuf>,
}

impl From<&Cli> for CleanRequest {
    fn from(cli: &Cli) -> Self {
        Self {
            input: cli.input.clone(),
            kind: cli.kind.clone(),
            overrides: cli.overrides.clone(),
            regions: cli.regions.clone(),
            strict_event_ids: cli.strict_event_ids,
            event_id_pattern: cli.event_id_pattern.clone(),
            csv_out: cli.csv_out.clone(),
        }
    }
}

/// Builds the cleaning configuration for the request.
///
/// The dataset kind is checked first so an invalid kind fails before the
/// input is touched.
pub fn build_config(request: &CleanRequest) -> Result<CleaningConfig> {
    let kind: DatasetKind = request.kind.parse()?;
    let mut config = CleaningConfig::for_kind(kind).context("load default configuration")?;
    if let Some(path) = &request.regions {
        let regions = RegionTable::from_path(path)
            .with_context(|| format!("load locality table {}", path.display()))?;
        config = config.with_regions(regions)?;
    }
    if request.strict_event_ids {
        let policy = match &request.event_id_pattern {
            Some(pattern) => EventIdPolicy::require(pattern)?,
            None => EventIdPolicy::strict()?,
        };
        config = config.with_event_id_policy(policy)?;
    }
    Ok(config)
}

/// Reads, cleans and optionally exports one upload.
pub fn run_clean(request: &CleanRequest) -> Result<CleaningOutcome> {
    let config = build_config(request)?;
    let span = info_span!(
        "run",
        input = %request.input.display(),
        kind = %config.kind()
    );
    let _guard = span.enter();

    let table = read_csv_table(&request.input, &ReadOptions::default())
        .with_context(|| format!("read {}", request.input.display()))?;
    info!(
        rows = table.len(),
        columns = table.headers.len(),
        skipped = table.skipped_lines,
        "loaded upload"
    );

    let outcome = CleaningPipeline::new(config)
        .with_overrides(request.overrides.clone())
        .run(&table)
        .context("clean upload")?;

    if let Some(path) = &request.csv_out {
        write_csv_file(&outcome.records, path)
            .with_context(|| format!("write {}", path.display()))?;
    }
    Ok(outcome)
}

/// The structured error line written to stderr on failure.
pub fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
