//! Date/time parsing and formatting.
//!
//! User input is deliberately permissive ([`parse_when`] tries a fixed ladder
//! of formats), while the on-disk encoding is exactly one shape: ISO-8601
//! local date-time. The two grammars are independent; changing one must not
//! leak into the other.
//!
//! Accepted input formats, in priority order:
//!
//! - `2019-12-02T18:00` (ISO date-time)
//! - `2019-12-02 18:00` (same, space separator)
//! - `2019-12-02` (midnight)
//! - `2/12/2019 1800` / `2/12/2019`
//! - `2-12-2019 1800` / `2-12-2019`
//!
//! Every numeric format requires a 4-digit year. chrono's own numeric parsing
//! happily accepts `20` as a year, so each format is gated by a shape regex
//! before chrono sees the string; a 2-digit year fails every gate and the
//! input is rejected.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DeskError, Result};

static ISO_DATETIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(:\d{2})?$").unwrap());
static ISO_DATETIME_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}$").unwrap());
static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static SLASH_DATETIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4} \d{4}$").unwrap());
static SLASH_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").unwrap());
static DASH_DATETIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}-\d{1,2}-\d{4} \d{4}$").unwrap());
static DASH_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}-\d{1,2}-\d{4}$").unwrap());

/// Parses a user-supplied date/time into the canonical timestamp.
///
/// Date-only inputs resolve to midnight. Unparsable input fails with a
/// ready-to-display message listing example formats.
pub fn parse_when(raw: &str) -> Result<NaiveDateTime> {
    let s = raw.trim();

    if ISO_DATETIME.is_match(s) {
        if let Some(dt) = parse_iso_datetime(s) {
            return Ok(dt);
        }
    }
    if ISO_DATETIME_SPACE.is_match(s) {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("T");
        if let Some(dt) = parse_iso_datetime(&normalized) {
            return Ok(dt);
        }
    }
    if ISO_DATE.is_match(s) {
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(at_midnight(d));
        }
    }
    if SLASH_DATETIME.is_match(s) {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%d/%m/%Y %H%M") {
            return Ok(dt);
        }
    }
    if SLASH_DATE.is_match(s) {
        if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
            return Ok(at_midnight(d));
        }
    }
    if DASH_DATETIME.is_match(s) {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%d-%m-%Y %H%M") {
            return Ok(dt);
        }
    }
    if DASH_DATE.is_match(s) {
        if let Ok(d) = NaiveDate::parse_from_str(s, "%d-%m-%Y") {
            return Ok(at_midnight(d));
        }
    }

    Err(DeskError::domain(format!(
        "I couldn't understand the date/time: \"{}\".\nTry formats like: 2019-12-02, 2019-12-02 18:00, 2/12/2019 1800.",
        raw
    )))
}

/// Parses the `ondate` query argument. This grammar is intentionally narrower
/// than [`parse_when`]: a bare ISO date or `d/M/yyyy`, nothing else.
pub fn parse_on_date(raw: &str) -> Result<NaiveDate> {
    let s = raw.trim();
    if ISO_DATE.is_match(s) {
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(d);
        }
    }
    if SLASH_DATE.is_match(s) {
        if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
            return Ok(d);
        }
    }
    Err(DeskError::domain("Use: onDate <yyyy-mm-dd | dd/MM/yyyy>"))
}

/// Storage form: ISO-8601 local date-time, seconds included
/// (`2019-12-02T18:00:00`).
pub fn encode_storage(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Parses the storage form back. Seconds are optional on the way in, so files
/// written by hand (or by older builds) still load.
pub fn parse_storage(s: &str) -> Option<NaiveDateTime> {
    parse_iso_datetime(s.trim())
}

/// Human form: date only when the time-of-day is exactly midnight
/// (`Dec 02 2019`), otherwise date and time (`2019-12-02 18:00`).
pub fn display_when(dt: NaiveDateTime) -> String {
    if dt.time() == NaiveTime::MIN {
        dt.format("%b %d %Y").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Human form for a bare date (`Dec 02 2019`), used by the `ondate` header.
pub fn display_date(d: NaiveDate) -> String {
    d.format("%b %d %Y").to_string()
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}

fn at_midnight(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}
