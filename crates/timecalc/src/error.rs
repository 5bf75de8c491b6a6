//! Error types for timecalc operations.
//!
//! Display text is stable: callers surface these messages verbatim.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Initial time must be in H:MM AM/PM or HH:MM format.")]
    InvalidTimeFormat,

    #[error("Time hours must be between 1 and 12 for AM/PM format.")]
    TwelveHourOutOfRange,

    #[error("Time hours must be between 0 and 23 for HH:MM format.")]
    TwentyFourHourOutOfRange,

    #[error("Time minutes must be between 00 and 59.")]
    TimeMinutesOutOfRange,

    #[error("Time value must be between 0 and 1439 minutes from midnight, got {0}.")]
    MinutesFromMidnightOutOfRange(u32),

    #[error("Invalid duration string format: {0}")]
    InvalidDurationFormat(String),

    #[error("Days component must be non-negative.")]
    NegativeDays,

    #[error("Hours component must be non-negative.")]
    NegativeHours,

    #[error("Minutes component must be between 0 and 59.")]
    DurationMinutesOutOfRange,

    #[error("Seconds component must be between 0 and 59.")]
    DurationSecondsOutOfRange,

    #[error("Duration exceeds the supported range.")]
    DurationTooLarge,

    #[error("Invalid date '{0}', expected YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Date arithmetic out of range.")]
    DateOutOfRange,

    #[error("Day offset out of range.")]
    DayOffsetOutOfRange,
}

/// Whether an input failed to match any grammar or matched one with
/// out-of-bounds values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Range,
}

impl ClockError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClockError::InvalidTimeFormat
            | ClockError::InvalidDurationFormat(_)
            | ClockError::InvalidDate(_) => ErrorKind::Format,
            ClockError::TwelveHourOutOfRange
            | ClockError::TwentyFourHourOutOfRange
            | ClockError::TimeMinutesOutOfRange
            | ClockError::MinutesFromMidnightOutOfRange(_)
            | ClockError::NegativeDays
            | ClockError::NegativeHours
            | ClockError::DurationMinutesOutOfRange
            | ClockError::DurationSecondsOutOfRange
            | ClockError::DurationTooLarge
            | ClockError::DateOutOfRange
            | ClockError::DayOffsetOutOfRange => ErrorKind::Range,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClockError>;
