// src/filter.rs
use serde::{Deserialize, Serialize};

use crate::schema::Record;

/// Narrowing applied before aggregation. `None` matches everything.
/// Values compare exactly against the raw `Tipo` / `Prioridad` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

impl Criteria {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn is_all(&self) -> bool {
        self.kind.is_none() && self.priority.is_none()
    }

    pub fn matches(&self, record: &Record) -> bool {
        let kind_ok = self.kind.as_deref().map_or(true, |k| record.kind() == k);
        let priority_ok = self
            .priority
            .as_deref()
            .map_or(true, |p| record.priority().as_str() == p);
        kind_ok && priority_ok
    }
}

/// Borrowing view of the matching records, input order kept.
pub fn filter_refs<'a>(records: &'a [Record], criteria: &Criteria) -> Vec<&'a Record> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

/// Owned copy of the matching records, input order kept.
pub fn filter(records: &[Record], criteria: &Criteria) -> Vec<Record> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RawFields;

    fn rec(number: &str, kind: &str, priority: &str) -> Record {
        Record::new(RawFields {
            number: number.into(),
            kind: kind.into(),
            priority: priority.into(),
            ..Default::default()
        })
    }

    fn sample() -> Vec<Record> {
        vec![
            rec("1", "Seguridad", "Urgent"),
            rec("2", "Acabados", "Low"),
            rec("3", "Seguridad", "High"),
            rec("4", "Seguridad", "Urgent"),
        ]
    }

    fn numbers(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.number()).collect()
    }

    #[test]
    fn unset_criteria_match_all() {
        let records = sample();
        assert!(Criteria::all().is_all());
        assert_eq!(filter(&records, &Criteria::all()), records);
    }

    #[test]
    fn kind_and_priority_combine() {
        let records = sample();
        let by_kind = filter(&records, &Criteria::all().with_kind("Seguridad"));
        assert_eq!(numbers(&by_kind), ["1", "3", "4"]);

        let both = Criteria::all()
            .with_kind("Seguridad")
            .with_priority("Urgent");
        assert_eq!(numbers(&filter(&records, &both)), ["1", "4"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample();
        let criteria = Criteria::all().with_priority("Urgent");
        let once = filter(&records, &criteria);
        let twice = filter(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn refs_match_owned() {
        let records = sample();
        let criteria = Criteria::all().with_kind("Acabados");
        let refs = filter_refs(&records, &criteria);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0], &records[1]);
    }

    #[test]
    fn no_match_is_empty() {
        let records = sample();
        assert!(filter(&records, &Criteria::all().with_kind("Eléctrico")).is_empty());
    }
}
