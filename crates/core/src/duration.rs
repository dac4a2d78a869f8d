//! Execution duration text for the metadata popover.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::error::MetadataError;

const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = 1_440.0;
const MINUTES_PER_MONTH: f64 = 43_200.0;
const MINUTES_PER_YEAR: f64 = 525_600.0;

/// Parse an engine timestamp.
///
/// Accepts RFC 3339, the `+0000` offset form some engine endpoints emit
/// (`2022-02-03T16:44:06.981+0000`), and plain dates (read as midnight UTC).
pub fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, MetadataError> {
    let rfc3339_err = match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(ts) => return Ok(ts),
        Err(e) => e,
    };

    let compact = with_offset_colon(raw).and_then(|s| OffsetDateTime::parse(&s, &Rfc3339).ok());
    if let Some(ts) = compact {
        return Ok(ts);
    }

    let date_only = format_description!("[year]-[month]-[day]");
    if let Ok(date) = Date::parse(raw, &date_only) {
        return Ok(date.midnight().assume_utc());
    }

    Err(MetadataError::InvalidTimestamp {
        value: raw.to_string(),
        message: rfc3339_err.to_string(),
    })
}

/// `...+0000` becomes `...+00:00`; `None` if `raw` has no compact offset.
fn with_offset_colon(raw: &str) -> Option<String> {
    let split = raw.len().checked_sub(5)?;
    let (head, offset) = raw.split_at_checked(split)?;
    let bytes = offset.as_bytes();
    if !matches!(bytes[0], b'+' | b'-') || !bytes[1..].iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(format!("{}{}:{}", head, &offset[..3], &offset[3..]))
}

/// Strict distance in the largest whole unit, rounded.
///
/// Anything under one second reads "Less than 1 second".
pub fn format_distance(duration: Duration) -> String {
    let millis = duration.whole_milliseconds().unsigned_abs() as f64;
    if millis < 1_000.0 {
        return "Less than 1 second".to_string();
    }

    let seconds = millis / 1_000.0;
    let minutes = seconds / SECONDS_PER_MINUTE;

    let (value, unit) = if seconds < SECONDS_PER_MINUTE {
        (seconds, "second")
    } else if minutes < MINUTES_PER_HOUR {
        (minutes, "minute")
    } else if minutes < MINUTES_PER_DAY {
        (minutes / MINUTES_PER_HOUR, "hour")
    } else if minutes < MINUTES_PER_MONTH {
        (minutes / MINUTES_PER_DAY, "day")
    } else if minutes < MINUTES_PER_YEAR {
        (minutes / MINUTES_PER_MONTH, "month")
    } else {
        (minutes / MINUTES_PER_YEAR, "year")
    };

    let count = value.round() as u64;
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Duration between start and end, or between start and `now` with
/// `running_suffix` appended while the element has not ended.
///
/// An empty start date yields `Ok(None)`.
pub fn execution_duration(
    start_date: &str,
    end_date: Option<&str>,
    now: OffsetDateTime,
    running_suffix: &str,
) -> Result<Option<String>, MetadataError> {
    if start_date.is_empty() {
        return Ok(None);
    }
    let start = parse_timestamp(start_date)?;

    match end_date.filter(|e| !e.is_empty()) {
        Some(end) => {
            let end = parse_timestamp(end)?;
            Ok(Some(format_distance(end - start)))
        }
        None => Ok(Some(format!(
            "{}{}",
            format_distance(now - start),
            running_suffix
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn parses_rfc3339_and_compact_offsets() {
        assert_eq!(
            parse_timestamp("2018-06-21T10:00:00.000Z").unwrap(),
            datetime!(2018-06-21 10:00:00 UTC)
        );
        assert_eq!(
            parse_timestamp("2022-02-03T16:44:06.981+0000").unwrap(),
            datetime!(2022-02-03 16:44:06.981 UTC)
        );
        assert_eq!(
            parse_timestamp("2018-06-21").unwrap(),
            datetime!(2018-06-21 00:00:00 UTC)
        );
    }

    #[test]
    fn compact_offsets_keep_their_sign() {
        assert_eq!(
            parse_timestamp("2022-02-03T16:44:06.981-0130").unwrap(),
            datetime!(2022-02-03 18:14:06.981 UTC)
        );
        assert_eq!(with_offset_colon("2018-06-21"), None);
        assert_eq!(with_offset_colon("+00"), None);
    }

    #[test]
    fn rejects_garbage() {
        match parse_timestamp("yesterday") {
            Err(MetadataError::InvalidTimestamp { value, .. }) => assert_eq!(value, "yesterday"),
            other => panic!("expected InvalidTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn sub_second_distance() {
        assert_eq!(format_distance(Duration::ZERO), "Less than 1 second");
        assert_eq!(
            format_distance(Duration::milliseconds(999)),
            "Less than 1 second"
        );
    }

    #[test]
    fn distance_units_and_rounding() {
        assert_eq!(format_distance(Duration::seconds(1)), "1 second");
        assert_eq!(format_distance(Duration::seconds(21)), "21 seconds");
        assert_eq!(format_distance(Duration::seconds(90)), "2 minutes");
        assert_eq!(format_distance(Duration::minutes(61)), "1 hour");
        assert_eq!(format_distance(Duration::hours(49)), "2 days");
        assert_eq!(format_distance(Duration::days(45)), "2 months");
        assert_eq!(format_distance(Duration::days(800)), "2 years");
    }

    #[test]
    fn negative_spans_use_magnitude() {
        assert_eq!(format_distance(Duration::seconds(-5)), "5 seconds");
    }

    #[test]
    fn completed_element_duration() {
        let text = execution_duration(
            "2018-06-21T10:00:00.000Z",
            Some("2018-06-21T10:00:00.000Z"),
            datetime!(2024-01-01 00:00:00 UTC),
            " (running)",
        )
        .unwrap();
        assert_eq!(text.as_deref(), Some("Less than 1 second"));
    }

    #[test]
    fn running_element_duration_gets_suffix() {
        let text = execution_duration(
            "2024-01-01T00:00:00Z",
            None,
            datetime!(2024-01-01 00:00:21 UTC),
            " (running)",
        )
        .unwrap();
        assert_eq!(text.as_deref(), Some("21 seconds (running)"));
    }

    #[test]
    fn empty_start_has_no_duration() {
        let text = execution_duration("", None, OffsetDateTime::UNIX_EPOCH, "").unwrap();
        assert_eq!(text, None);
    }
}
