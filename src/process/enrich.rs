// src/process/enrich.rs
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::date_parser::parse_date;
use super::utils::{contains_upper, leading_digits};
use crate::category::{Priority, Status, TypeLabel};
use crate::schema::RawFields;

/// Placeholder for a record whose specialty has no leading WBS code.
pub const NO_CODE: &str = "S/C";
/// Tower name when the location path is empty.
pub const DEFAULT_TOWER: &str = "General";

static CODE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s-\s").expect("code prefix regex should compile"));

const FLOOR_MARKERS: &[&str] = &["PISO", "SOTANO", "SÓTANO", "NIVEL"];
const UNIT_MARKERS: &[&str] = &["DPTO", "DP"];

/// Vertical position taken from the location path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Floor {
    Level(String),
    Undefined,
}

impl Floor {
    pub const UNDEFINED_LABEL: &'static str = "Sin definir";

    pub fn label(&self) -> &str {
        match self {
            Floor::Level(s) => s,
            Floor::Undefined => Self::UNDEFINED_LABEL,
        }
    }
}

/// Everything derived from a record's raw cells. Computed once by [`enrich`].
#[derive(Clone, Debug, PartialEq)]
pub struct Enrichment {
    pub date: Option<NaiveDate>,
    pub location_path: Vec<String>,
    pub tower: String,
    pub floor: Floor,
    pub unit: Option<String>,
    pub classification_code: String,
    pub classification_name: String,
    pub type_label: TypeLabel,
    pub status: Status,
    pub priority: Priority,
}

/// Notification date wins; the creation date is only consulted when the
/// notification cell is empty.
pub fn select_date(notified_on: &str, created_on: &str) -> Option<NaiveDate> {
    if notified_on.is_empty() {
        parse_date(created_on)
    } else {
        parse_date(notified_on)
    }
}

pub fn split_location(raw: &str) -> Vec<String> {
    raw.split('>').map(|s| s.trim().to_string()).collect()
}

fn find_segment<'a>(path: &'a [String], markers: &[&str]) -> Option<&'a String> {
    path.iter()
        .find(|seg| markers.iter().any(|m| contains_upper(seg, m)))
}

pub fn find_floor(path: &[String]) -> Floor {
    find_segment(path, FLOOR_MARKERS)
        .map(|s| Floor::Level(s.clone()))
        .unwrap_or(Floor::Undefined)
}

/// Apartment segment (`DPTO 1401`, `DP-3`).
pub fn find_unit(path: &[String]) -> Option<String> {
    find_segment(path, UNIT_MARKERS).cloned()
}

/// Split `"110 - PRO - Control de Calidad"` into `("110", "PRO")`.
pub fn classify(specialty: &str) -> (String, String) {
    let code = leading_digits(specialty)
        .map(str::to_string)
        .unwrap_or_else(|| NO_CODE.to_string());
    let rest = CODE_PREFIX.replace(specialty, "");
    let name = rest.split('-').next().unwrap_or_default().trim().to_string();
    (code, name)
}

pub fn enrich(raw: &RawFields) -> Enrichment {
    let location_path = split_location(&raw.location);
    let tower = location_path
        .first()
        .filter(|s| !s.is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_TOWER.to_string());
    let floor = find_floor(&location_path);
    let unit = find_unit(&location_path);
    let (classification_code, classification_name) = classify(&raw.specialty);

    Enrichment {
        date: select_date(&raw.notified_on, &raw.created_on),
        tower,
        floor,
        unit,
        location_path,
        classification_code,
        classification_name,
        type_label: TypeLabel::parse(&raw.kind),
        status: Status::parse(&raw.status),
        priority: Priority::parse(&raw.priority),
    }
}
