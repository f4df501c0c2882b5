// src/session.rs
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::analytics::{aggregate_refs, AggregateOptions, Summary};
use crate::config::EngineConfig;
use crate::demo::{DEMO_EXPORT, DEMO_FILE_NAME};
use crate::error::IngestError;
use crate::filter::{filter_refs, Criteria};
use crate::process;
use crate::schema::Record;

/// The records of one ingested export.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    records: Vec<Record>,
}

impl Dataset {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

type MemoKey = (Criteria, NaiveDate);

/// Current dataset plus the last computed summary.
///
/// Every ingestion replaces the dataset wholesale, and a failed one leaves the
/// session empty. Summaries are recomputed from the held records (never by
/// re-parsing) and reused while criteria and reference day stay the same.
#[derive(Debug, Default)]
pub struct Session {
    config: EngineConfig,
    dataset: Option<Dataset>,
    memo: Option<(MemoKey, Arc<Summary>)>,
}

impl Session {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            dataset: None,
            memo: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Held records; empty before the first successful ingestion.
    pub fn records(&self) -> &[Record] {
        self.dataset
            .as_ref()
            .map(Dataset::records)
            .unwrap_or_default()
    }

    /// Replace the dataset with `text`. Returns the record count.
    pub fn ingest(&mut self, name: &str, text: &str) -> Result<usize, IngestError> {
        self.memo = None;
        self.dataset = None;
        let records = process::ingest(text, &self.config)?;
        let count = records.len();
        info!(name, records = count, "dataset replaced");
        self.dataset = Some(Dataset {
            name: name.to_string(),
            records,
        });
        Ok(count)
    }

    pub fn load_demo(&mut self) -> Result<usize, IngestError> {
        self.ingest(DEMO_FILE_NAME, DEMO_EXPORT)
    }

    /// Drop the dataset (session reset).
    pub fn clear(&mut self) {
        debug!("session cleared");
        self.dataset = None;
        self.memo = None;
    }

    pub fn filtered(&self, criteria: &Criteria) -> Vec<&Record> {
        filter_refs(self.records(), criteria)
    }

    /// Summary of the records matching `criteria`. Before any ingestion this is
    /// the neutral all-zero summary.
    pub fn summary(&mut self, criteria: &Criteria, today: NaiveDate) -> Arc<Summary> {
        if let Some((key, summary)) = &self.memo {
            if key.0 == *criteria && key.1 == today {
                return Arc::clone(summary);
            }
        }

        let options = AggregateOptions::new(today).with_limits(self.config.limits());
        let selection = self.filtered(criteria);
        let summary = Arc::new(aggregate_refs(&selection, &options));
        self.memo = Some(((criteria.clone(), today), Arc::clone(&summary)));
        summary
    }
}
