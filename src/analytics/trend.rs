use std::collections::HashMap;

use chrono::Datelike;
use serde::Serialize;

use crate::category::Status;
use crate::schema::Record;

/// Per-day counters. `date` is `dd/mm`; the year is not shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub created: usize,
    pub closed: usize,
    pub open: usize,
    #[serde(skip)]
    month_day: (u32, u32),
}

/// Daily created/closed/open counts over dated records.
///
/// Days are keyed by day and month only, so the same calendar day of two
/// different years shares a bucket, and buckets are ordered by month then
/// day (a January point sorts before a December one).
pub fn daily_trend(records: &[&Record]) -> Vec<TrendPoint> {
    let mut index: HashMap<(u32, u32), usize> = HashMap::new();
    let mut points: Vec<TrendPoint> = Vec::new();

    for record in records {
        let Some(date) = record.date() else {
            continue;
        };
        let key = (date.month(), date.day());
        let i = *index.entry(key).or_insert_with(|| {
            points.push(TrendPoint {
                date: format!("{:02}/{:02}", date.day(), date.month()),
                created: 0,
                closed: 0,
                open: 0,
                month_day: key,
            });
            points.len() - 1
        });
        let point = &mut points[i];
        point.created += 1;
        match record.status() {
            Status::Closed => point.closed += 1,
            Status::Open => point.open += 1,
            _ => {}
        }
    }

    points.sort_by_key(|p| p.month_day);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RawFields;

    fn rec(date: &str, status: &str) -> Record {
        Record::new(RawFields {
            notified_on: date.into(),
            status: status.into(),
            ..Default::default()
        })
    }

    #[test]
    fn buckets_by_day_and_counts_statuses() {
        let records = vec![
            rec("26/12/25", "Iniciado"),
            rec("26/12/25", "Cerrado"),
            rec("27/12/25", "Abierto"),
            rec("", "Cerrado"),
            rec("basura", "Cerrado"),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let trend = daily_trend(&refs);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].date, "26/12");
        assert_eq!((trend[0].created, trend[0].closed, trend[0].open), (2, 1, 0));
        assert_eq!(trend[1].date, "27/12");
        assert_eq!((trend[1].created, trend[1].closed, trend[1].open), (1, 0, 1));
    }

    #[test]
    fn ordered_by_month_then_day_ignoring_year() {
        let records = vec![
            rec("30/12/25", "Iniciado"),
            rec("05/01/26", "Iniciado"),
            rec("02/01/26", "Iniciado"),
            rec("30/12/26", "Iniciado"),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let dates: Vec<String> = daily_trend(&refs).into_iter().map(|p| p.date).collect();
        assert_eq!(dates, ["02/01", "05/01", "30/12"]);
    }

    #[test]
    fn no_dates_no_points() {
        let records = vec![rec("", "Cerrado")];
        let refs: Vec<&Record> = records.iter().collect();
        assert!(daily_trend(&refs).is_empty());
    }
}
