// Formatting helpers for the elapsed-time display

use crate::error::TimerError;

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Formats a duration in milliseconds as `M:SS`.
///
/// Minutes are not padded and never roll over into hours, so an hour reads
/// `60:00`. Negative input is rejected.
pub fn format_time(millis: i64) -> Result<String, TimerError> {
    if millis < 0 {
        return Err(TimerError::InvalidInput(millis));
    }
    let m = millis / MS_PER_MINUTE;
    let s = (millis % MS_PER_MINUTE) / MS_PER_SECOND;
    Ok(format!("{}:{:02}", m, s))
}

/// Infallible variant for elapsed values, which are never negative.
/// Values past `i64::MAX` ms are clamped.
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let ms = i64::try_from(elapsed_ms).unwrap_or(i64::MAX);
    match format_time(ms) {
        Ok(text) => text,
        Err(_) => unreachable!("{} ms is non-negative", ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_zero_minutes() {
        assert_eq!(format_time(0).unwrap(), "0:00");
    }

    #[test]
    fn seconds_are_zero_padded() {
        assert_eq!(format_time(61_000).unwrap(), "1:01");
        assert_eq!(format_time(9_000).unwrap(), "0:09");
    }

    #[test]
    fn partial_seconds_are_floored() {
        assert_eq!(format_time(999).unwrap(), "0:00");
        assert_eq!(format_time(59_999).unwrap(), "0:59");
    }

    #[test]
    fn last_second_before_the_hour() {
        assert_eq!(format_time(3_599_000).unwrap(), "59:59");
    }

    #[test]
    fn no_hour_rollover() {
        assert_eq!(format_time(3_600_000).unwrap(), "60:00");
        assert_eq!(format_time(6_000_000).unwrap(), "100:00");
    }

    #[test]
    fn negative_input_is_rejected() {
        assert_eq!(format_time(-1), Err(TimerError::InvalidInput(-1)));
    }

    #[test]
    fn same_input_same_output() {
        let a = format_time(125_432).unwrap();
        let b = format_time(125_432).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "2:05");
    }

    #[test]
    fn elapsed_matches_checked_formatter() {
        for ms in [0_u64, 1_000, 61_000, 3_599_000, 3_600_000] {
            assert_eq!(format_elapsed(ms), format_time(ms as i64).unwrap());
        }
    }

    #[test]
    fn elapsed_past_i64_is_clamped() {
        assert_eq!(format_elapsed(u64::MAX), format_time(i64::MAX).unwrap());
    }
}
