//! Calendar-anchored composition.
//!
//! Unlike [`combine`](crate::combine::combine), this works at full second precision on
//! real calendar dates: the start is `date + day_offset` at the given time,
//! and the end is the start plus every second of the duration. Month and year
//! rollover come from chrono's proleptic Gregorian arithmetic.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::duration::Duration;
use crate::error::{ClockError, Result};
use crate::time::Time;

/// Rendering for anchored timestamps, e.g. `2024-01-01 03:00 AM`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ClockError::InvalidDate(s.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchoredSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration: Duration,
}

/// An [`AnchoredSpan`] rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchoredReport {
    pub start_datetime_str: String,
    pub end_datetime_str: String,
    pub duration_details_str: String,
}

impl AnchoredSpan {
    pub fn report(&self) -> AnchoredReport {
        AnchoredReport {
            start_datetime_str: self.start.format(TIMESTAMP_FORMAT).to_string(),
            end_datetime_str: self.end.format(TIMESTAMP_FORMAT).to_string(),
            duration_details_str: self.duration.to_string(),
        }
    }
}

/// Anchor `time` on `date` shifted by `day_offset` days, then add `duration`.
///
/// The offset moves the calendar date only; it is applied before the
/// duration is added.
///
/// # Errors
///
/// [`ClockError::DateOutOfRange`] if either timestamp falls outside chrono's
/// supported range.
///
/// # Examples
///
/// ```
/// use timecalc::{compose_anchored, parse_date, parse_duration, parse_time};
///
/// let span = compose_anchored(
///     parse_time("10:00 PM")?,
///     &parse_duration("5:00")?,
///     parse_date("2023-12-31")?,
///     0,
/// )?;
/// assert_eq!(span.report().end_datetime_str, "2024-01-01 03:00 AM");
/// # Ok::<(), timecalc::ClockError>(())
/// ```
pub fn compose_anchored(
    time: Time,
    duration: &Duration,
    date: NaiveDate,
    day_offset: i64,
) -> Result<AnchoredSpan> {
    let shifted = TimeDelta::try_days(day_offset)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(ClockError::DateOutOfRange)?;

    let start = shifted
        .and_hms_opt(time.hour(), time.minute(), 0)
        .ok_or(ClockError::DateOutOfRange)?;

    // total_seconds never exceeds i64::MAX.
    let end = TimeDelta::try_seconds(duration.total_seconds() as i64)
        .and_then(|delta| start.checked_add_signed(delta))
        .ok_or(ClockError::DateOutOfRange)?;

    Ok(AnchoredSpan {
        start,
        end,
        duration: *duration,
    })
}
