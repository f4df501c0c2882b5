use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::assignee_label;
use crate::category::{Priority, Status};
use crate::schema::Record;

/// Headline numbers of the dashboard. All zero for an empty selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total: usize,
    /// Closed or ready for review.
    pub resolved: usize,
    /// Urgent or high priority.
    pub critical: usize,
    /// `round(100 * resolved / total)`.
    pub closure_rate: u32,
    pub closed: usize,
    pub open: usize,
    pub in_progress: usize,
    pub urgent: usize,
    pub high: usize,
    /// `round(100 * urgent / total)`.
    pub criticality_index: u32,
    /// Mean whole days between each dated record and the reference day.
    pub average_age_days: f64,
    pub assignee_count: usize,
}

/// Rounded percentage, 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round() as u32
}

pub fn compute(records: &[&Record], today: NaiveDate) -> Kpis {
    let mut kpis = Kpis {
        total: records.len(),
        ..Default::default()
    };
    let mut age_sum: i64 = 0;
    let mut dated: usize = 0;
    let mut assignees: HashSet<&str> = HashSet::new();

    for record in records {
        let status = record.status();
        if status.is_resolved() {
            kpis.resolved += 1;
        }
        match status {
            Status::Closed => kpis.closed += 1,
            Status::Open => kpis.open += 1,
            Status::Started => kpis.in_progress += 1,
            Status::ReadyForReview | Status::Other(_) => {}
        }

        let priority = record.priority();
        if priority.is_critical() {
            kpis.critical += 1;
        }
        match priority {
            Priority::Urgent => kpis.urgent += 1,
            Priority::High => kpis.high += 1,
            Priority::Medium | Priority::Low | Priority::Other(_) => {}
        }

        if let Some(date) = record.date() {
            age_sum += (today - date).num_days();
            dated += 1;
        }
        assignees.insert(assignee_label(record));
    }

    kpis.closure_rate = percent(kpis.resolved, kpis.total);
    kpis.criticality_index = percent(kpis.urgent, kpis.total);
    kpis.average_age_days = if dated == 0 {
        0.0
    } else {
        age_sum as f64 / dated as f64
    };
    kpis.assignee_count = assignees.len();
    kpis
}
