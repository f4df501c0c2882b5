//! Vertical heatmap: observations per floor, top floor first, basements last.

use std::cmp::Reverse;

use super::tally::{Bucket, Tally};
use crate::process::enrich::Floor;
use crate::process::utils::{contains_upper, first_number};
use crate::schema::Record;

/// Heatmap row for records without a recognisable floor.
pub const OUTSIDE_LABEL: &str = "Exteriores/Otros";

/// Signed position used to order the heatmap (higher = drawn higher).
///
/// Basements map to `-n - 100`, floors and levels to `n`, anything else to 0,
/// with `n` the first number in the label (0 when there is none). A label
/// naming both a basement and a floor counts as a basement.
pub fn floor_rank(label: &str) -> i64 {
    let n = first_number(label).unwrap_or(0);
    if contains_upper(label, "SOTANO") || contains_upper(label, "SÓTANO") {
        n.saturating_neg().saturating_sub(100)
    } else if contains_upper(label, "PISO") || contains_upper(label, "NIVEL") {
        n
    } else {
        0
    }
}

/// Display label of a floor: any `>` path prefix dropped, blanks and the
/// undefined sentinel folded into [`OUTSIDE_LABEL`].
pub fn heatmap_label(floor: &Floor) -> &str {
    match floor {
        Floor::Level(s) => {
            let last = s.rsplit('>').next().unwrap_or(s).trim();
            if last.is_empty() {
                OUTSIDE_LABEL
            } else {
                last
            }
        }
        Floor::Undefined => OUTSIDE_LABEL,
    }
}

pub fn heatmap(records: &[&Record]) -> Vec<Bucket> {
    let tally: Tally = records.iter().map(|r| heatmap_label(r.floor())).collect();
    let mut buckets = tally.into_buckets();
    buckets.sort_by_key(|b| Reverse(floor_rank(&b.name)));
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_labels(labels: &[&str]) -> Vec<String> {
        let tally: Tally = labels.iter().copied().collect();
        let mut buckets = tally.into_buckets();
        buckets.sort_by_key(|b| Reverse(floor_rank(&b.name)));
        buckets.into_iter().map(|b| b.name).collect()
    }

    #[test]
    fn rank_values() {
        assert_eq!(floor_rank("PISO 15"), 15);
        assert_eq!(floor_rank("piso 1"), 1);
        assert_eq!(floor_rank("NIVEL 3"), 3);
        assert_eq!(floor_rank("SOTANO 1"), -101);
        assert_eq!(floor_rank("Sótano 2"), -102);
        assert_eq!(floor_rank("SOTANO"), -100);
        assert_eq!(floor_rank("Exteriores/Otros"), 0);
        assert_eq!(floor_rank("AZOTEA 20"), 0);
    }

    #[test]
    fn floors_above_basements() {
        assert_eq!(
            sort_labels(&["PISO 1", "PISO 15", "SOTANO 1"]),
            ["PISO 15", "PISO 1", "SOTANO 1"]
        );
    }

    #[test]
    fn deeper_basements_sink_and_others_sit_at_ground() {
        assert_eq!(
            sort_labels(&["SOTANO 2", OUTSIDE_LABEL, "SOTANO 1", "PISO 2", "NIVEL 10"]),
            ["NIVEL 10", "PISO 2", OUTSIDE_LABEL, "SOTANO 1", "SOTANO 2"]
        );
    }

    #[test]
    fn equal_ranks_keep_first_seen_order() {
        assert_eq!(
            sort_labels(&["AZOTEA", OUTSIDE_LABEL, "PISO 0"]),
            ["AZOTEA", OUTSIDE_LABEL, "PISO 0"]
        );
    }

    #[test]
    fn undefined_floor_is_outside() {
        assert_eq!(heatmap_label(&Floor::Undefined), OUTSIDE_LABEL);
        assert_eq!(heatmap_label(&Floor::Level("PISO 3".into())), "PISO 3");
        assert_eq!(heatmap_label(&Floor::Level("TORRE>PISO 3".into())), "PISO 3");
    }
}
