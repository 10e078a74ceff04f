//! Publication date parsing.
//!
//! Candidate strings come from meta tags, `<time>` elements, and free
//! text. Direct ISO-8601 parsing is tried first; pattern-based
//! extraction handles the loose formats real pages use. Parsing never
//! errors: an unusable candidate yields `None`.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::patterns::{DATE_MDY, DATE_TEXTUAL, DATE_YMD};

/// Dates before this year are treated as epoch artifacts or garbage
/// parses and rejected.
const MIN_PLAUSIBLE_YEAR: i32 = 1990;

/// Parse a date from a candidate string.
///
/// Tries, in order: RFC 3339 / ISO-8601 datetime, bare ISO date, then
/// pattern extraction (`YYYY-MM-DD`, `MM/DD/YYYY`, `Month D, YYYY`).
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return plausible(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date_to_utc(date);
    }

    extract_date_pattern(raw)
}

/// Pattern-based extraction from free text.
fn extract_date_pattern(text: &str) -> Option<DateTime<Utc>> {
    if let Some(caps) = DATE_YMD.captures(text) {
        let year: i32 = caps.get(1)?.as_str().parse().ok()?;
        let month: u32 = caps.get(2)?.as_str().parse().ok()?;
        let day: u32 = caps.get(3)?.as_str().parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return date_to_utc(date);
        }
    }

    if let Some(caps) = DATE_MDY.captures(text) {
        let month: u32 = caps.get(1)?.as_str().parse().ok()?;
        let day: u32 = caps.get(2)?.as_str().parse().ok()?;
        let year: i32 = caps.get(3)?.as_str().parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return date_to_utc(date);
        }
    }

    if let Some(caps) = DATE_TEXTUAL.captures(text) {
        let month = month_number(caps.get(1)?.as_str())?;
        let day: u32 = caps.get(2)?.as_str().parse().ok()?;
        let year: i32 = caps.get(3)?.as_str().parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return date_to_utc(date);
        }
    }

    None
}

fn month_number(name: &str) -> Option<u32> {
    let name = name.to_ascii_lowercase();
    let number = match name.as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(number)
}

fn date_to_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    plausible(Utc.from_utc_datetime(&midnight))
}

fn plausible(datetime: DateTime<Utc>) -> Option<DateTime<Utc>> {
    use chrono::Datelike;
    (datetime.year() >= MIN_PLAUSIBLE_YEAR).then_some(datetime)
}
