//! Adding a [`Duration`] to a [`Time`] on a recurring clock face.
//!
//! The time side is minute-aligned, so any sub-minute remainder in the sum
//! comes from the duration's seconds. That remainder is truncated: `:29` and
//! `:59` added to the same time give the same result.

use serde::Serialize;

use crate::duration::{Duration, SECONDS_PER_DAY, SECONDS_PER_MINUTE};
use crate::error::{ClockError, Result};
use crate::time::Time;

/// A new time of day and how many midnights were crossed getting there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Combined {
    pub time: Time,
    pub days_passed: i64,
}

impl Combined {
    /// `days_passed` plus an externally supplied, possibly negative, day offset.
    pub fn total_days(&self, day_offset: i64) -> Result<i64> {
        self.days_passed
            .checked_add(day_offset)
            .ok_or(ClockError::DayOffsetOutOfRange)
    }
}

/// Add `duration` to `time`.
///
/// `days_passed` is `⌊sum / 86400⌋` and is never negative. The new time is
/// the whole minutes left within the final day.
///
/// # Examples
///
/// ```
/// use timecalc::{combine, parse_duration, parse_time};
///
/// let result = combine(parse_time("5:00 PM")?, &parse_duration("150:35")?)?;
/// assert_eq!(result.time.to_string(), "11:35 PM");
/// assert_eq!(result.days_passed, 6);
/// # Ok::<(), timecalc::ClockError>(())
/// ```
pub fn combine(time: Time, duration: &Duration) -> Result<Combined> {
    // Durations are capped at i64::MAX seconds, so this cannot wrap.
    let sum = u64::from(time.minutes_from_midnight()) * SECONDS_PER_MINUTE
        + duration.total_seconds();

    let days_passed = (sum / SECONDS_PER_DAY) as i64;
    let seconds_within_day = sum % SECONDS_PER_DAY;
    let minutes_within_day = (seconds_within_day / SECONDS_PER_MINUTE) as u32;

    Ok(Combined {
        time: Time::from_minutes(minutes_within_day)?,
        days_passed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::parse_duration;
    use crate::time::parse_time;

    fn add(time: &str, duration: &str) -> (String, i64) {
        let result = combine(
            parse_time(time).unwrap(),
            &parse_duration(duration).unwrap(),
        )
        .unwrap();
        (result.time.to_string(), result.days_passed)
    }

    #[test]
    fn test_same_period() {
        assert_eq!(add("3:30 PM", "2:12"), ("5:42 PM".into(), 0));
    }

    #[test]
    fn test_am_to_pm() {
        assert_eq!(add("10:00 AM", "3:00"), ("1:00 PM".into(), 0));
        assert_eq!(add("11:50 AM", "0:20"), ("12:10 PM".into(), 0));
    }

    #[test]
    fn test_crossing_midnight() {
        assert_eq!(add("11:00 PM", "2:30"), ("1:30 AM".into(), 1));
        assert_eq!(add("8:00 PM", "4:30"), ("12:30 AM".into(), 1));
        assert_eq!(add("11:59 PM", "0:01:00"), ("12:00 AM".into(), 1));
    }

    #[test]
    fn test_many_hours() {
        assert_eq!(add("5:00 PM", "150:35"), ("11:35 PM".into(), 6));
    }

    #[test]
    fn test_exact_day_lengths() {
        assert_eq!(add("10:00 AM", "24:00"), ("10:00 AM".into(), 1));
        assert_eq!(add("10:00 AM", "25:00"), ("11:00 AM".into(), 1));
        assert_eq!(add("10:00 PM", "12:00"), ("10:00 AM".into(), 1));
        assert_eq!(add("10:00 AM", "12:00"), ("10:00 PM".into(), 0));
    }

    #[test]
    fn test_days_prefix_counts_toward_days_passed() {
        assert_eq!(add("8:00 AM", "2 days, 3:00:55"), ("11:00 AM".into(), 2));
        assert_eq!(add("23:00", "2 days, 2:05:30"), ("1:05 AM".into(), 3));
    }

    #[test]
    fn test_sub_minute_seconds_are_truncated() {
        assert_eq!(add("10:00 AM", "1 day, 2:05:30"), ("12:05 PM".into(), 1));
        assert_eq!(add("10:00 AM", ":59"), ("10:00 AM".into(), 0));
        assert_eq!(add("10:00 AM", ":29"), add("10:00 AM", ":59"));
    }

    #[test]
    fn test_seconds_can_complete_a_minute_only_with_time_alignment() {
        // 11:59 PM + 59s is still within the same minute.
        assert_eq!(add("11:59 PM", ":59"), ("11:59 PM".into(), 0));
    }

    #[test]
    fn test_zero_duration_is_identity() {
        assert_eq!(add("7:15 AM", "0:00"), ("7:15 AM".into(), 0));
    }

    #[test]
    fn test_total_days_with_offset() {
        let result = combine(
            parse_time("10:00 PM").unwrap(),
            &parse_duration("3:30:30").unwrap(),
        )
        .unwrap();
        assert_eq!(result.total_days(1).unwrap(), 2);
        assert_eq!(result.total_days(-3).unwrap(), -2);
    }

    #[test]
    fn test_total_days_overflow() {
        let result = combine(
            parse_time("10:00 PM").unwrap(),
            &parse_duration("3:00").unwrap(),
        )
        .unwrap();
        assert_eq!(
            result.total_days(i64::MAX).unwrap_err(),
            ClockError::DayOffsetOutOfRange
        );
    }
}
