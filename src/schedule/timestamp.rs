//! Timestamp parsing for CMS datetime fields.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Offsetless layouts the CMS uses for `datetime` fields.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a CMS timestamp.
///
/// RFC 3339 strings carry their own offset. Offsetless strings are read as
/// wall-clock time in `tz`. Returns `None` for anything else, which callers
/// treat as "unavailable".
pub fn parse_timestamp(raw: &str, tz: &FixedOffset) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).single())
        .map(|local| local.with_timezone(&Utc))
}
