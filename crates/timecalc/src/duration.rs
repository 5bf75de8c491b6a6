//! Durations written as clock-style strings.
//!
//! Two grammars are accepted, tried in this order:
//!
//! - `[D days, ]H:MM[:SS]`: an optional day count (`day` or `days`), a
//!   required hours/minutes pair, and optional seconds. Hours are unbounded
//!   (`"150:35"` is 150 hours and 35 minutes).
//! - `:SS`: seconds only.
//!
//! A parsed [`Duration`] is canonicalized to a total second count. Rendering
//! always works from that total, never from the source string.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{ClockError, Result};

pub(crate) const SECONDS_PER_MINUTE: u64 = 60;
pub(crate) const SECONDS_PER_HOUR: u64 = 3_600;
pub(crate) const SECONDS_PER_DAY: u64 = 86_400;

static CLOCK_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([0-9]+)\s+days?,\s+)?([0-9]+):([0-9]{1,2})(?::([0-9]{1,2}))?$")
        .expect("clock-form duration pattern compiles")
});

static SECONDS_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:([0-9]{1,2})$").expect("seconds-form pattern compiles"));

/// Which components were written out in the source, and their values.
///
/// `"2:05"` has hours and minutes present, with seconds present as zero.
/// `":30"` has only seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Components {
    pub days: Option<u64>,
    pub hours: Option<u64>,
    pub minutes: Option<u64>,
    pub seconds: Option<u64>,
}

/// A non-negative span of whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    total_seconds: u64,
    components: Components,
}

/// A grammar match with its digit captures, before any range checks.
#[derive(Debug)]
enum Reading<'a> {
    Clock {
        days: Option<&'a str>,
        hours: &'a str,
        minutes: &'a str,
        seconds: Option<&'a str>,
    },
    SecondsOnly(&'a str),
}

fn match_clock_form(s: &str) -> Option<Reading<'_>> {
    let caps = CLOCK_FORM.captures(s)?;
    Some(Reading::Clock {
        days: caps.get(1).map(|m| m.as_str()),
        hours: caps.get(2)?.as_str(),
        minutes: caps.get(3)?.as_str(),
        seconds: caps.get(4).map(|m| m.as_str()),
    })
}

fn match_seconds_form(s: &str) -> Option<Reading<'_>> {
    let caps = SECONDS_FORM.captures(s)?;
    Some(Reading::SecondsOnly(caps.get(1)?.as_str()))
}

/// Digit runs are unbounded for days and hours. A run too long for `i64`
/// saturates, so the component range checks still run in order and the
/// overflow surfaces from the total.
fn parse_digits(digits: &str) -> i64 {
    digits.parse().unwrap_or(i64::MAX)
}

/// Parse a duration string.
///
/// # Errors
///
/// [`ClockError::InvalidDurationFormat`] if neither grammar matches the whole
/// string; otherwise the first component range violation, checked days,
/// hours, minutes, then seconds.
///
/// # Examples
///
/// ```
/// use timecalc::parse_duration;
///
/// let d = parse_duration("1 day, 2:05:30").unwrap();
/// assert_eq!(d.total_seconds(), 86_400 + 2 * 3_600 + 5 * 60 + 30);
/// assert_eq!(d.to_string(), "1 day, 2:05:30");
/// ```
pub fn parse_duration(input: &str) -> Result<Duration> {
    let reading = match_clock_form(input)
        .or_else(|| match_seconds_form(input))
        .ok_or_else(|| ClockError::InvalidDurationFormat(input.to_string()))?;

    match reading {
        Reading::Clock {
            days,
            hours,
            minutes,
            seconds,
        } => Duration::from_parts(
            days.map(parse_digits),
            Some(parse_digits(hours)),
            Some(parse_digits(minutes)),
            Some(seconds.map_or(0, parse_digits)),
        ),
        Reading::SecondsOnly(seconds) => {
            Duration::from_parts(None, None, None, Some(parse_digits(seconds)))
        }
    }
}

impl Duration {
    /// Build a duration from individual components. `None` means the
    /// component is absent and contributes nothing.
    ///
    /// Days and hours must be non-negative; minutes and seconds must be
    /// 0–59. The first violation is reported.
    pub fn from_parts(
        days: Option<i64>,
        hours: Option<i64>,
        minutes: Option<i64>,
        seconds: Option<i64>,
    ) -> Result<Self> {
        let days = match days {
            Some(d) if d < 0 => return Err(ClockError::NegativeDays),
            other => other.map(|d| d as u64),
        };
        let hours = match hours {
            Some(h) if h < 0 => return Err(ClockError::NegativeHours),
            other => other.map(|h| h as u64),
        };
        let minutes = match minutes {
            Some(m) if !(0..=59).contains(&m) => {
                return Err(ClockError::DurationMinutesOutOfRange)
            }
            other => other.map(|m| m as u64),
        };
        let seconds = match seconds {
            Some(s) if !(0..=59).contains(&s) => {
                return Err(ClockError::DurationSecondsOutOfRange)
            }
            other => other.map(|s| s as u64),
        };

        let total_seconds = [
            (days, SECONDS_PER_DAY),
            (hours, SECONDS_PER_HOUR),
            (minutes, SECONDS_PER_MINUTE),
            (seconds, 1),
        ]
        .into_iter()
        .try_fold(0u64, |acc, (value, scale)| {
            value.unwrap_or(0).checked_mul(scale)?.checked_add(acc)
        })
        .filter(|total| *total <= i64::MAX as u64)
        .ok_or(ClockError::DurationTooLarge)?;

        Ok(Duration {
            total_seconds,
            components: Components {
                days,
                hours,
                minutes,
                seconds,
            },
        })
    }

    /// The canonical length in seconds.
    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    /// The components as written in the source.
    pub fn components(&self) -> Components {
        self.components
    }
}

impl fmt::Display for Duration {
    /// `[N day(s), ]H:MM:SS`, derived from the total second count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.total_seconds / SECONDS_PER_DAY;
        let remainder = self.total_seconds % SECONDS_PER_DAY;
        let hours = remainder / SECONDS_PER_HOUR;
        let remainder = remainder % SECONDS_PER_HOUR;
        let minutes = remainder / SECONDS_PER_MINUTE;
        let seconds = remainder % SECONDS_PER_MINUTE;

        match days {
            0 => {}
            1 => f.write_str("1 day, ")?,
            n => write!(f, "{n} days, ")?,
        }
        write!(f, "{hours}:{minutes:02}:{seconds:02}")
    }
}

impl FromStr for Duration {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self> {
        parse_duration(s)
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
