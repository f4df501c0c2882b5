// src/process/mod.rs
use tracing::{info, instrument, warn};

use crate::config::EngineConfig;
use crate::error::IngestError;
use crate::schema::{self, Record};

pub mod date_parser;
pub mod enrich;
pub mod split;
pub mod utils;

pub use split::{parse, RawRow};

/// Parse + build in one pass. Zero surviving records is the one failure the
/// caller gets to see; every other defect only shrinks the result.
#[instrument(level = "info", skip(text, config), fields(text_len = text.len()))]
pub fn ingest(text: &str, config: &EngineConfig) -> Result<Vec<Record>, IngestError> {
    config.validate()?;
    let rows = parse(text);
    let records = schema::build(&rows, &config.columns);
    if records.is_empty() {
        warn!(rows = rows.len(), "no valid rows could be parsed");
        return Err(IngestError::NoValidRows);
    }
    info!(rows = rows.len(), records = records.len(), "ingested export");
    Ok(records)
}
