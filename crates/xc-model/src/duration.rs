//! Conversion between race time strings and seconds.
//!
//! Finish times arrive as `H:MM:SS` or `MM:SS`. The field count decides the
//! interpretation: three fields are hours, minutes and seconds; two fields are
//! minutes and seconds. Only the trailing seconds field may carry a decimal
//! fraction (chip timing such as `16:42.3`).
//!
//! Paces are always rendered as a fixed-width `HH:MM:SS` string. The hour
//! field stays `00` for every realistic pace.

use crate::error::{Result, ScoringError};

/// Parses an elapsed time into seconds.
///
/// Empty input is an error. Use [`parse_duration_or_zero`] when a missing
/// time should stand in as a zero-duration placeholder.
pub fn parse_duration(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ScoringError::invalid_time(text, "empty time"));
    }
    let fields: Vec<&str> = trimmed.split(':').collect();
    let (hours, minutes, seconds) = match fields.as_slice() {
        [h, m, s] => {
            let minutes = parse_whole(text, m)?;
            if minutes >= 60 {
                return Err(ScoringError::invalid_time(
                    text,
                    format!("minutes field {minutes} must be below 60"),
                ));
            }
            (parse_whole(text, h)?, minutes, parse_seconds(text, s)?)
        }
        [m, s] => (0, parse_whole(text, m)?, parse_seconds(text, s)?),
        _ => {
            return Err(ScoringError::invalid_time(
                text,
                format!(
                    "expected H:MM:SS or MM:SS, found {} field(s)",
                    fields.len()
                ),
            ));
        }
    };
    if seconds >= 60.0 {
        return Err(ScoringError::invalid_time(
            text,
            format!("seconds field {seconds} must be below 60"),
        ));
    }
    Ok(f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + seconds)
}

/// Parses an elapsed time, treating empty input as zero seconds.
pub fn parse_duration_or_zero(text: &str) -> Result<f64> {
    if text.trim().is_empty() {
        return Ok(0.0);
    }
    parse_duration(text)
}

fn parse_whole(original: &str, field: &str) -> Result<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScoringError::invalid_time(
            original,
            format!("'{field}' is not a whole number"),
        ));
    }
    field
        .parse::<u32>()
        .map_err(|e| ScoringError::invalid_time(original, e.to_string()))
}

fn parse_seconds(original: &str, field: &str) -> Result<f64> {
    let (whole, fraction) = match field.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (field, None),
    };
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !digits(whole) || fraction.is_some_and(|f| !digits(f)) {
        return Err(ScoringError::invalid_time(
            original,
            format!("'{field}' is not a number of seconds"),
        ));
    }
    field
        .parse::<f64>()
        .map_err(|e| ScoringError::invalid_time(original, e.to_string()))
}

/// Splits a pace into whole minutes and rounded seconds, carrying a rounded
/// 60 into the next minute.
fn split_pace(seconds_per_mile: f64) -> (u64, u64) {
    let seconds = seconds_per_mile.max(0.0);
    let mut minutes = (seconds / 60.0).floor() as u64;
    let mut secs = (seconds % 60.0).round() as u64;
    if secs == 60 {
        minutes += 1;
        secs = 0;
    }
    (minutes, secs)
}

/// Formats seconds-per-mile as `HH:MM:SS`.
///
/// ```
/// use xc_model::duration::format_pace;
///
/// assert_eq!(format_pace(600.0), "00:10:00");
/// assert_eq!(format_pace(59.6), "00:01:00");
/// ```
pub fn format_pace(seconds_per_mile: f64) -> String {
    let (minutes, secs) = split_pace(seconds_per_mile);
    format!("{:02}:{:02}:{:02}", minutes / 60, minutes % 60, secs)
}

/// Whole seconds of the pace exactly as [`format_pace`] displays it.
pub fn pace_whole_seconds(seconds_per_mile: f64) -> u64 {
    let (minutes, secs) = split_pace(seconds_per_mile);
    minutes * 60 + secs
}

/// Formats elapsed seconds as `H:MM:SS`, with tenths when the time is fractional.
pub fn format_elapsed(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let tenths = (seconds * 10.0).round() as u64;
    let hours = tenths / 36_000;
    let minutes = (tenths / 600) % 60;
    let secs = (tenths / 10) % 60;
    match tenths % 10 {
        0 => format!("{hours}:{minutes:02}:{secs:02}"),
        fraction => format!("{hours}:{minutes:02}:{secs:02}.{fraction}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_field_times() {
        assert_eq!(parse_duration("0:20:00").unwrap(), 1200.0);
        assert_eq!(parse_duration("1:02:03").unwrap(), 3723.0);
        assert_eq!(parse_duration(" 0:19:30 ").unwrap(), 1170.0);
    }

    #[test]
    fn parses_two_field_times() {
        assert_eq!(parse_duration("17:05").unwrap(), 1025.0);
        assert_eq!(parse_duration("75:10").unwrap(), 4510.0);
        assert!((parse_duration("16:42.3").unwrap() - 1002.3).abs() < 1e-9);
    }

    #[test]
    fn rejects_wrong_field_counts() {
        for text in ["1200", "1:2:3:4", ""] {
            let err = parse_duration(text).unwrap_err();
            assert!(matches!(err, ScoringError::InvalidTime { .. }), "{text}");
        }
    }

    #[test]
    fn rejects_non_numeric_fields() {
        for text in ["a:30", "17:xx", "-1:30", "17:", ":30", "17:3e1", "17:30.", "0:+5:00"] {
            assert!(parse_duration(text).is_err(), "{text}");
        }
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(parse_duration("17:60").is_err());
        assert!(parse_duration("1:60:00").is_err());
    }

    #[test]
    fn zero_placeholder_is_explicit() {
        assert_eq!(parse_duration_or_zero("").unwrap(), 0.0);
        assert_eq!(parse_duration_or_zero("   ").unwrap(), 0.0);
        assert_eq!(parse_duration_or_zero("18:00").unwrap(), 1080.0);
        assert!(parse_duration_or_zero("18").is_err());
    }

    #[test]
    fn formats_pace_with_carry() {
        assert_eq!(format_pace(600.0), "00:10:00");
        assert_eq!(format_pace(59.6), "00:01:00");
        assert_eq!(format_pace(389.61), "00:06:30");
        assert_eq!(format_pace(379.4), "00:06:19");
        assert_eq!(format_pace(3725.0), "01:02:05");
    }

    #[test]
    fn pace_whole_seconds_matches_display() {
        assert_eq!(pace_whole_seconds(59.6), 60);
        assert_eq!(pace_whole_seconds(379.4), 379);
        assert_eq!(pace_whole_seconds(379.5), 380);
    }

    #[test]
    fn formats_elapsed() {
        assert_eq!(format_elapsed(1200.0), "0:20:00");
        assert_eq!(format_elapsed(3723.0), "1:02:03");
        assert_eq!(format_elapsed(1002.3), "0:16:42.3");
        assert_eq!(format_elapsed(0.0), "0:00:00");
    }
}
