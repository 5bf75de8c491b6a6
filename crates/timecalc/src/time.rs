//! Times of day at minute precision.
//!
//! Accepted inputs, tried in order:
//!
//! - 12-hour: `H:MM AM` / `H:MM PM` (meridiem is case-insensitive, at least
//!   one whitespace character before it)
//! - 24-hour: `H:MM` / `HH:MM`
//!
//! Whatever the input grammar, a [`Time`] stores only minutes from midnight
//! and always renders as `H:MM AM/PM`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{ClockError, Result};

pub(crate) const MINUTES_PER_DAY: u32 = 1_440;

static TWELVE_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2}):([0-9]{2})\s+(AM|PM)$").expect("12-hour pattern compiles")
});

static TWENTY_FOUR_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("24-hour pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Meridiem {
    fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// A time of day, `0 ≤ minutes_from_midnight ≤ 1439`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    minutes_from_midnight: u32,
}

#[derive(Debug)]
enum Reading {
    TwelveHour {
        hour: u32,
        minute: u32,
        meridiem: Meridiem,
    },
    TwentyFourHour {
        hour: u32,
        minute: u32,
    },
}

fn match_twelve_hour(s: &str) -> Option<Reading> {
    let caps = TWELVE_HOUR.captures(s)?;
    let meridiem = if caps.get(3)?.as_str().eq_ignore_ascii_case("am") {
        Meridiem::Am
    } else {
        Meridiem::Pm
    };
    Some(Reading::TwelveHour {
        hour: caps.get(1)?.as_str().parse().ok()?,
        minute: caps.get(2)?.as_str().parse().ok()?,
        meridiem,
    })
}

fn match_twenty_four_hour(s: &str) -> Option<Reading> {
    let caps = TWENTY_FOUR_HOUR.captures(s)?;
    Some(Reading::TwentyFourHour {
        hour: caps.get(1)?.as_str().parse().ok()?,
        minute: caps.get(2)?.as_str().parse().ok()?,
    })
}

/// Parse a time-of-day string.
///
/// # Errors
///
/// [`ClockError::InvalidTimeFormat`] if neither grammar matches; otherwise
/// the grammar's hour range error, or the shared minute range error.
///
/// # Examples
///
/// ```
/// use timecalc::parse_time;
///
/// assert_eq!(parse_time("12:00 PM").unwrap().minutes_from_midnight(), 720);
/// assert_eq!(parse_time("13:05").unwrap().to_string(), "1:05 PM");
/// ```
pub fn parse_time(input: &str) -> Result<Time> {
    match match_twelve_hour(input).or_else(|| match_twenty_four_hour(input)) {
        Some(Reading::TwelveHour {
            hour,
            minute,
            meridiem,
        }) => Time::from_twelve_hour(hour, minute, meridiem),
        Some(Reading::TwentyFourHour { hour, minute }) => Time::from_twenty_four_hour(hour, minute),
        None => Err(ClockError::InvalidTimeFormat),
    }
}

impl Time {
    /// Build from a 12-hour clock reading. Every `Time` produced from a
    /// meridiem reading, including [`Time::from_minutes`], passes through here.
    pub fn from_twelve_hour(hour: u32, minute: u32, meridiem: Meridiem) -> Result<Self> {
        if !(1..=12).contains(&hour) {
            return Err(ClockError::TwelveHourOutOfRange);
        }
        if minute > 59 {
            return Err(ClockError::TimeMinutesOutOfRange);
        }
        let hour = match (hour, meridiem) {
            (12, Meridiem::Am) => 0,
            (12, Meridiem::Pm) => 12,
            (h, Meridiem::Am) => h,
            (h, Meridiem::Pm) => h + 12,
        };
        Ok(Time {
            minutes_from_midnight: hour * 60 + minute,
        })
    }

    pub fn from_twenty_four_hour(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 {
            return Err(ClockError::TwentyFourHourOutOfRange);
        }
        if minute > 59 {
            return Err(ClockError::TimeMinutesOutOfRange);
        }
        Ok(Time {
            minutes_from_midnight: hour * 60 + minute,
        })
    }

    /// Rebuild a time from minutes past midnight (0–1439).
    pub fn from_minutes(minutes_from_midnight: u32) -> Result<Self> {
        if minutes_from_midnight >= MINUTES_PER_DAY {
            return Err(ClockError::MinutesFromMidnightOutOfRange(
                minutes_from_midnight,
            ));
        }
        let hour = minutes_from_midnight / 60;
        let minute = minutes_from_midnight % 60;
        let meridiem = if hour < 12 { Meridiem::Am } else { Meridiem::Pm };
        Time::from_twelve_hour(display_hour(hour), minute, meridiem)
    }

    pub fn minutes_from_midnight(&self) -> u32 {
        self.minutes_from_midnight
    }

    /// Hour on the 24-hour clock (0–23).
    pub fn hour(&self) -> u32 {
        self.minutes_from_midnight / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes_from_midnight % 60
    }

    pub fn meridiem(&self) -> Meridiem {
        if self.hour() < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }
}

/// 0 and 12 both show as 12.
fn display_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02} {}",
            display_hour(self.hour()),
            self.minute(),
            self.meridiem().as_str()
        )
    }
}

impl FromStr for Time {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self> {
        parse_time(s)
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noon_and_midnight() {
        assert_eq!(parse_time("12:00 PM").unwrap().minutes_from_midnight(), 720);
        assert_eq!(parse_time("12:00 AM").unwrap().minutes_from_midnight(), 0);
    }

    #[test]
    fn test_twelve_hour_pm_adds_twelve() {
        assert_eq!(parse_time("3:30 PM").unwrap().minutes_from_midnight(), 15 * 60 + 30);
        assert_eq!(parse_time("11:59 PM").unwrap().minutes_from_midnight(), 1439);
    }

    #[test]
    fn test_meridiem_is_case_insensitive() {
        assert_eq!(parse_time("5:00 pm").unwrap(), parse_time("5:00 PM").unwrap());
        assert_eq!(parse_time("5:00 Am").unwrap().minutes_from_midnight(), 300);
    }

    #[test]
    fn test_twelve_hour_allows_wide_whitespace() {
        assert_eq!(parse_time("5:00 \t PM").unwrap().to_string(), "5:00 PM");
    }

    #[test]
    fn test_twenty_four_hour() {
        assert_eq!(parse_time("13:00").unwrap().to_string(), "1:00 PM");
        assert_eq!(parse_time("00:30").unwrap().to_string(), "12:30 AM");
        assert_eq!(parse_time("0:00").unwrap().minutes_from_midnight(), 0);
        assert_eq!(parse_time("23:59").unwrap().minutes_from_midnight(), 1439);
    }

    #[test]
    fn test_invalid_formats() {
        for input in [
            "5:00PM", "5:00 XM", "5:00 A", "A:00 PM", "5:AA PM", "5 PM", "13:00PM", "bad", "",
            "5:0 PM", "100:00", " 5:00 PM", "5:00 PM ",
        ] {
            let err = parse_time(input).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Initial time must be in H:MM AM/PM or HH:MM format.",
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_twelve_hour_range() {
        for input in ["13:00 PM", "0:30 AM", "00:00 PM"] {
            let err = parse_time(input).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Time hours must be between 1 and 12 for AM/PM format."
            );
        }
    }

    #[test]
    fn test_twenty_four_hour_range() {
        let err = parse_time("24:00").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Time hours must be between 0 and 23 for HH:MM format."
        );
    }

    #[test]
    fn test_minute_message_is_shared() {
        let twelve = parse_time("5:60 PM").unwrap_err();
        let twenty_four = parse_time("17:60").unwrap_err();
        assert_eq!(twelve, twenty_four);
        assert_eq!(twelve.to_string(), "Time minutes must be between 00 and 59.");
    }

    #[test]
    fn test_hour_checked_before_minute() {
        assert_eq!(
            parse_time("13:75 PM").unwrap_err(),
            ClockError::TwelveHourOutOfRange
        );
        assert_eq!(
            parse_time("25:75").unwrap_err(),
            ClockError::TwentyFourHourOutOfRange
        );
    }

    #[test]
    fn test_from_minutes_bounds() {
        assert_eq!(Time::from_minutes(0).unwrap().to_string(), "12:00 AM");
        assert_eq!(Time::from_minutes(720).unwrap().to_string(), "12:00 PM");
        assert_eq!(Time::from_minutes(1439).unwrap().to_string(), "11:59 PM");
        assert_eq!(
            Time::from_minutes(1440).unwrap_err(),
            ClockError::MinutesFromMidnightOutOfRange(1440)
        );
    }

    #[test]
    fn test_display_does_not_echo_input() {
        assert_eq!(parse_time("05:07 am").unwrap().to_string(), "5:07 AM");
        assert_eq!(parse_time("12:00").unwrap().to_string(), "12:00 PM");
    }

    #[test]
    fn test_accessors() {
        let t = parse_time("9:45 PM").unwrap();
        assert_eq!(t.hour(), 21);
        assert_eq!(t.minute(), 45);
        assert_eq!(t.meridiem(), Meridiem::Pm);
    }

    #[test]
    fn test_serializes_as_display_string() {
        let t = parse_time("21:15").unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"9:15 PM\"");
    }
}
