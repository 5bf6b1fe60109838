//! Display formatting for detail values.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

/// Placeholder for absent dates.
pub const MISSING: &str = "N/A";

const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parsed API timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    /// Instant with time of day.
    Instant(DateTime<Utc>),
    /// Calendar date without time.
    Date(NaiveDate),
}

/// Parse the timestamp shapes the API emits.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(Timestamp::Instant(parsed.with_timezone(&Utc)));
    }
    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Timestamp::Instant(parsed.and_utc()));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(Timestamp::Date)
}

/// Browser offset from `Date.getTimezoneOffset()` (minutes behind UTC).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn offset_from_js_minutes(minutes: f64) -> FixedOffset {
    let seconds = (minutes.round() as i32).saturating_mul(60);
    FixedOffset::west_opt(seconds).unwrap_or_else(utc_offset)
}

/// The zero offset.
#[must_use]
pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// `M/D/YYYY` in the given offset, `N/A` when absent, raw text when unparsable.
#[must_use]
pub fn format_date(raw: Option<&str>, offset: FixedOffset) -> String {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return MISSING.to_string();
    };
    match parse_timestamp(raw) {
        Some(Timestamp::Instant(instant)) => instant
            .with_timezone(&offset)
            .format("%-m/%-d/%Y")
            .to_string(),
        Some(Timestamp::Date(date)) => date.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// `M/D/YYYY, h:mm:ss AM` in the given offset.
#[must_use]
pub fn format_date_time(raw: Option<&str>, offset: FixedOffset) -> String {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return MISSING.to_string();
    };
    match parse_timestamp(raw) {
        Some(Timestamp::Instant(instant)) => instant
            .with_timezone(&offset)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        Some(Timestamp::Date(date)) => format!("{}, 12:00:00 AM", date.format("%-m/%-d/%Y")),
        None => raw.to_string(),
    }
}

/// `Yes` / `No`.
#[must_use]
pub const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Secret columns are never shown, only whether they are set.
#[must_use]
pub const fn masked(is_set: bool) -> &'static str {
    if is_set { "***Hidden***" } else { "Not Set" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_in_the_browser_offset() {
        let manila = offset_from_js_minutes(-480.0);
        assert_eq!(
            format_date(Some("2024-03-31T20:30:00.000Z"), manila),
            "4/1/2024"
        );
        assert_eq!(
            format_date(Some("2024-03-31T20:30:00.000Z"), utc_offset()),
            "3/31/2024"
        );
    }

    #[test]
    fn date_times_use_twelve_hour_clock() {
        assert_eq!(
            format_date_time(Some("2024-01-05 15:04:05"), utc_offset()),
            "1/5/2024, 3:04:05 PM"
        );
    }

    #[test]
    fn missing_and_unparsable_values() {
        assert_eq!(format_date(None, utc_offset()), MISSING);
        assert_eq!(format_date(Some("  "), utc_offset()), MISSING);
        assert_eq!(format_date(Some("soon"), utc_offset()), "soon");
        assert_eq!(format_date(Some("1990-07-14"), offset_from_js_minutes(300.0)), "7/14/1990");
    }

    #[test]
    fn flags_and_secrets() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
        assert_eq!(masked(true), "***Hidden***");
        assert_eq!(masked(false), "Not Set");
    }
}
