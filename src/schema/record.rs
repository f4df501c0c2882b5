// src/schema/record.rs
use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use super::types::RawFields;
use crate::category::{Priority, Status, TypeLabel};
use crate::config::{Column, ColumnNames};
use crate::process::enrich::{enrich, Enrichment, Floor};
use crate::process::split::RawRow;
use crate::process::utils::clean_str;

/// One observation: its raw cells plus the fields derived from them.
/// Immutable once built; derived fields never drift from the raw ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    raw: RawFields,
    derived: Enrichment,
}

impl Record {
    pub fn new(raw: RawFields) -> Self {
        let derived = enrich(&raw);
        Self { raw, derived }
    }

    pub fn raw(&self) -> &RawFields {
        &self.raw
    }

    pub fn number(&self) -> &str {
        &self.raw.number
    }
    pub fn kind(&self) -> &str {
        &self.raw.kind
    }
    pub fn title(&self) -> &str {
        &self.raw.title
    }
    pub fn assignee(&self) -> &str {
        &self.raw.assignee
    }
    pub fn company(&self) -> &str {
        &self.raw.company
    }
    pub fn location(&self) -> &str {
        &self.raw.location
    }
    /// Value of a column the engine does not interpret.
    pub fn extra(&self, header: &str) -> Option<&str> {
        self.raw.extra.get(header).map(String::as_str)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.derived.date
    }
    pub fn location_path(&self) -> &[String] {
        &self.derived.location_path
    }
    pub fn tower(&self) -> &str {
        &self.derived.tower
    }
    pub fn floor(&self) -> &Floor {
        &self.derived.floor
    }
    pub fn unit(&self) -> Option<&str> {
        self.derived.unit.as_deref()
    }
    pub fn classification_code(&self) -> &str {
        &self.derived.classification_code
    }
    pub fn classification_name(&self) -> &str {
        &self.derived.classification_name
    }
    pub fn type_label(&self) -> TypeLabel {
        self.derived.type_label
    }
    pub fn status(&self) -> &Status {
        &self.derived.status
    }
    pub fn priority(&self) -> &Priority {
        &self.derived.priority
    }
}

/// Rows shorter than half the header are too damaged to trust.
fn passes_integrity_gate(row_len: usize, header_len: usize) -> bool {
    row_len >= header_len / 2
}

fn to_fields(headers: &[(String, Option<Column>)], row: &RawRow) -> RawFields {
    let mut fields = RawFields::default();
    for (idx, (name, column)) in headers.iter().enumerate() {
        let value = row.get(idx).cloned().unwrap_or_default();
        match column {
            Some(col) => fields.set(*col, value),
            None => {
                fields.extra.insert(name.clone(), value);
            }
        }
    }
    fields
}

/// Turn parsed rows (header first) into enriched records.
///
/// Fewer than two rows yields nothing. Short rows are dropped, missing cells
/// default to empty and cells past the header are ignored. Output order
/// follows input order.
#[instrument(level = "debug", skip(rows, columns), fields(rows = rows.len()))]
pub fn build(rows: &[RawRow], columns: &ColumnNames) -> Vec<Record> {
    let Some((header_row, data)) = rows.split_first() else {
        return Vec::new();
    };
    if data.is_empty() {
        debug!("header without data rows");
        return Vec::new();
    }

    let headers: Vec<(String, Option<Column>)> = header_row
        .iter()
        .map(|h| {
            let name = clean_str(h);
            let column = columns.resolve(&name);
            (name, column)
        })
        .collect();
    trace!(headers = ?headers, "resolved headers");

    let records: Vec<Record> = data
        .par_iter()
        .filter(|row| passes_integrity_gate(row.len(), headers.len()))
        .map(|row| Record::new(to_fields(&headers, row)))
        .collect();

    debug!(
        kept = records.len(),
        dropped = data.len() - records.len(),
        "built records"
    );
    records
}
