// src/schema/types.rs

use std::collections::BTreeMap;

use crate::config::Column;

/// The raw cells of one export row, keyed by role rather than header text.
/// Columns missing from the export or the row are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    pub number: String,
    pub kind: String,
    pub specialty: String,
    pub title: String,
    pub assignee: String,
    pub company: String,
    pub notified_on: String,
    pub created_on: String,
    pub status: String,
    pub priority: String,
    pub location: String,
    /// Headers the engine does not interpret, kept verbatim.
    pub extra: BTreeMap<String, String>,
}

impl RawFields {
    pub fn set(&mut self, column: Column, value: String) {
        let slot = match column {
            Column::Number => &mut self.number,
            Column::Kind => &mut self.kind,
            Column::Specialty => &mut self.specialty,
            Column::Title => &mut self.title,
            Column::Assignee => &mut self.assignee,
            Column::Company => &mut self.company,
            Column::NotifiedOn => &mut self.notified_on,
            Column::CreatedOn => &mut self.created_on,
            Column::Status => &mut self.status,
            Column::Priority => &mut self.priority,
            Column::Location => &mut self.location,
        };
        *slot = value;
    }
}
