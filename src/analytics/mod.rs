//! Aggregation engine: turns a (filtered) record selection into every view
//! the dashboard draws. Stateless and deterministic; the reference day used for
//! record ages is passed in rather than read from the clock.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::category::{Priority, Status};
use crate::config::Limits;
use crate::schema::Record;

pub mod floors;
pub mod kpis;
pub mod tally;
pub mod trend;

pub use floors::{floor_rank, heatmap_label, OUTSIDE_LABEL};
pub use kpis::Kpis;
pub use tally::{Bucket, ColoredBucket, Tally};
pub use trend::TrendPoint;

/// Company / assignee label for blank cells.
pub const UNASSIGNED_LABEL: &str = "Sin asignar";
/// Unit label for records outside any apartment.
pub const COMMON_AREAS_LABEL: &str = "Áreas Comunes";

pub(crate) fn assignee_label(record: &Record) -> &str {
    non_empty_or(record.assignee(), UNASSIGNED_LABEL)
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Reference day for record ages.
    pub today: NaiveDate,
    pub limits: Limits,
}

impl AggregateOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

/// Row of the observation table under the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRow {
    pub number: String,
    pub title: String,
    pub assignee: String,
    pub location: String,
    pub priority: String,
    pub priority_fill: &'static str,
    pub status: String,
    pub status_fill: &'static str,
}

impl From<&Record> for DetailRow {
    fn from(r: &Record) -> Self {
        Self {
            number: r.number().to_string(),
            title: r.title().to_string(),
            assignee: r.assignee().to_string(),
            location: r.location().to_string(),
            priority: r.priority().as_str().to_string(),
            priority_fill: r.priority().fill(),
            status: r.status().as_str().to_string(),
            status_fill: r.status().fill(),
        }
    }
}

/// Everything the dashboard renders for one selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub kpis: Kpis,
    /// Pareto of `"<code> - <name>"`, descending.
    pub classifications: Vec<Bucket>,
    /// Heatmap, highest floor first.
    pub floors: Vec<Bucket>,
    /// Apartments, descending.
    pub units: Vec<Bucket>,
    /// First-seen order.
    pub statuses: Vec<ColoredBucket>,
    /// First-seen order.
    pub priorities: Vec<ColoredBucket>,
    pub types: Vec<Bucket>,
    pub trend: Vec<TrendPoint>,
    pub companies: Vec<Bucket>,
    pub assignees: Vec<Bucket>,
    pub detail: Vec<DetailRow>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.kpis.total == 0
    }

    /// The camelCase JSON document the dashboard consumes.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn colored(tally: Tally, fill: impl Fn(&str) -> &'static str) -> Vec<ColoredBucket> {
    tally
        .into_buckets()
        .into_iter()
        .map(|b| ColoredBucket {
            fill: fill(&b.name),
            name: b.name,
            value: b.value,
        })
        .collect()
}

/// Summarise an owned selection.
pub fn aggregate(records: &[Record], options: &AggregateOptions) -> Summary {
    let refs: Vec<&Record> = records.iter().collect();
    aggregate_refs(&refs, options)
}

/// Summarise a borrowed selection, e.g. the output of
/// [`filter_refs`](crate::filter::filter_refs).
#[instrument(level = "debug", skip(records, options), fields(records = records.len()))]
pub fn aggregate_refs(records: &[&Record], options: &AggregateOptions) -> Summary {
    let limits = &options.limits;

    let mut classifications = Tally::new();
    let mut units = Tally::new();
    let mut statuses = Tally::new();
    let mut priorities = Tally::new();
    let mut types = Tally::new();
    let mut companies = Tally::new();
    let mut assignees = Tally::new();

    for r in records {
        classifications.add(&format!(
            "{} - {}",
            r.classification_code(),
            r.classification_name()
        ));
        units.add(r.unit().unwrap_or(COMMON_AREAS_LABEL));
        statuses.add(r.status().as_str());
        priorities.add(r.priority().as_str());
        types.add(r.type_label().as_str());
        companies.add(non_empty_or(r.company(), UNASSIGNED_LABEL));
        assignees.add(assignee_label(r));
    }

    let summary = Summary {
        kpis: kpis::compute(records, options.today),
        classifications: classifications.ranked(Some(limits.classifications)),
        floors: floors::heatmap(records),
        units: units.ranked(Some(limits.units)),
        statuses: colored(statuses, |s| Status::parse(s).fill()),
        priorities: colored(priorities, |p| Priority::parse(p).fill()),
        types: types.ranked(None),
        trend: trend::daily_trend(records),
        companies: companies.ranked(Some(limits.companies)),
        assignees: assignees.ranked(Some(limits.assignees)),
        detail: records
            .iter()
            .take(limits.detail_rows)
            .map(|r| DetailRow::from(*r))
            .collect(),
    };
    debug!(
        total = summary.kpis.total,
        floors = summary.floors.len(),
        trend_days = summary.trend.len(),
        "aggregated"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::palette;
    use crate::schema::RawFields;

    fn rec(specialty: &str, location: &str, status: &str, priority: &str) -> Record {
        Record::new(RawFields {
            specialty: specialty.into(),
            location: location.into(),
            status: status.into(),
            priority: priority.into(),
            ..Default::default()
        })
    }

    fn opts() -> AggregateOptions {
        AggregateOptions::new(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap())
    }

    fn names(buckets: &[Bucket]) -> Vec<&str> {
        buckets.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn empty_selection_is_neutral() {
        let summary = aggregate(&[], &opts());
        assert_eq!(summary, Summary::default());
        assert!(summary.is_empty());
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("NaN"));
        assert!(json.contains("\"closureRate\":0"));
    }

    #[test]
    fn pareto_ties_keep_first_seen_order() {
        let records = vec![
            rec("130 - PRO - Pintura", "", "", ""),
            rec("110 - PRO - Control de Calidad", "", "", ""),
            rec("110 - PRO - Control de Calidad", "", "", ""),
            rec("130 - PRO - Pintura", "", "", ""),
            rec("Varios", "", "", ""),
        ];
        let summary = aggregate(&records, &opts());
        assert_eq!(
            names(&summary.classifications),
            ["130 - PRO", "110 - PRO", "S/C - Varios"]
        );
        assert_eq!(summary.classifications[0].value, 2);
    }

    #[test]
    fn pareto_truncates_to_limit() {
        let records: Vec<Record> = (0..12)
            .map(|i| rec(&format!("{} - X{}", 100 + i, i), "", "", ""))
            .collect();
        let basic = opts().with_limits(Limits::for_variant(crate::config::Variant::Basic));
        assert_eq!(aggregate(&records, &basic).classifications.len(), 6);
        assert_eq!(aggregate(&records, &opts()).classifications.len(), 8);
    }

    #[test]
    fn heatmap_orders_floors() {
        let records = vec![
            rec("", "TORRE>PISO 1", "", ""),
            rec("", "TORRE>SOTANO 1", "", ""),
            rec("", "TORRE", "", ""),
            rec("", "TORRE>PISO 15", "", ""),
            rec("", "TORRE>PISO 1", "", ""),
        ];
        let summary = aggregate(&records, &opts());
        assert_eq!(
            names(&summary.floors),
            ["PISO 15", "PISO 1", OUTSIDE_LABEL, "SOTANO 1"]
        );
        assert_eq!(summary.floors[1].value, 2);
    }

    #[test]
    fn distributions_carry_fills() {
        let records = vec![
            rec("", "", "Iniciado", "Urgent"),
            rec("", "", "Cerrado", "Critica"),
            rec("", "", "Iniciado", "Urgent"),
        ];
        let summary = aggregate(&records, &opts());
        assert_eq!(
            summary.statuses,
            vec![
                ColoredBucket { name: "Iniciado".into(), value: 2, fill: palette::WARNING },
                ColoredBucket { name: "Cerrado".into(), value: 1, fill: palette::SUCCESS },
            ]
        );
        assert_eq!(summary.priorities[1].fill, palette::NEUTRAL);
    }

    #[test]
    fn blank_people_and_units_get_fallback_labels() {
        let records = vec![rec("", "TORRE>PISO 2", "", "")];
        let summary = aggregate(&records, &opts());
        assert_eq!(summary.companies[0].name, UNASSIGNED_LABEL);
        assert_eq!(summary.assignees[0].name, UNASSIGNED_LABEL);
        assert_eq!(summary.units[0].name, COMMON_AREAS_LABEL);
        assert_eq!(summary.types[0].name, "Otros");
    }

    #[test]
    fn detail_rows_follow_limit() {
        let records: Vec<Record> = (0..20).map(|_| rec("", "", "Abierto", "High")).collect();
        let summary = aggregate(&records, &opts());
        assert_eq!(summary.detail.len(), 15);
        assert_eq!(summary.detail[0].status_fill, palette::DANGER);
        assert_eq!(summary.detail[0].priority_fill, palette::WARNING);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let records = vec![
            rec("110 - PRO - A", "T>PISO 3>DPTO 301", "Cerrado", "High"),
            rec("120 - PRO - B", "T>SOTANO 2", "Abierto", "Low"),
            rec("120 - PRO - B", "T>PISO 3", "Iniciado", "Urgent"),
            rec("130 - PRO - C", "T", "Listo para revisión", "Medium"),
        ];
        let a = aggregate(&records, &opts()).to_json().unwrap();
        let b = aggregate(&records, &opts()).to_json().unwrap();
        assert_eq!(a, b);
    }
}
