use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::utils::leading_digits;

/// `D/M/Y` with a 1 to 4 digit year, optionally followed by a non-digit tail
/// (a time, usually).
static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{1,4})(?:\D.*)?$").expect("date regex should compile")
});

const YEAR_FIRST_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const YEAR_FIRST_DATETIME_FORMATS: &[&str] =
    &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];
const DAY_FIRST_DATE_FORMATS: &[&str] = &["%d-%m-%Y"];

/// Parse the slash form used by the exports. Two-digit years land in 2000+.
fn parse_day_month_year(s: &str) -> Option<NaiveDate> {
    let caps = DAY_MONTH_YEAR.captures(s)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let mut year: i32 = caps[3].parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Year-first layouts are only tried when the text opens with a full
/// four-digit year, so `5/1/6` is never read as year 5.
fn parse_generic(s: &str) -> Option<NaiveDate> {
    if !leading_digits(s).is_some_and(|d| d.len() == 4) {
        return DAY_FIRST_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    YEAR_FIRST_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            YEAR_FIRST_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Best-effort calendar date from an export cell. Never fails: empty,
/// garbage and impossible dates (`31/02/25`) all come back as `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if DAY_MONTH_YEAR.is_match(s) {
        return parse_day_month_year(s);
    }
    parse_generic(s)
}
