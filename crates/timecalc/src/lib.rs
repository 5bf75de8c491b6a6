//! # timecalc
//!
//! Clock arithmetic over human-written times and durations.
//!
//! Parse a starting time (`"5:00 PM"`, `"17:00"`) and a duration
//! (`"150:35"`, `"2 days, 3:00:55"`, `":30"`), then either add them on a
//! recurring clock face (minute precision, with a count of midnights crossed)
//! or anchor them on a calendar date at full second precision.
//!
//! ## Modules
//!
//! - [`time`]: `H:MM AM/PM` and `HH:MM` parsing into a minute-of-day value
//! - [`duration`]: clock-style duration parsing into a total second count
//! - [`combine`](mod@combine): time + duration with day rollover
//! - [`anchored`]: calendar-date composition with day offsets
//! - [`render`]: result lines for terminals and web responses
//! - [`api`]: the JSON request contract of the calculate-time endpoint
//! - [`error`]: Error types
//!
//! The parsers and arithmetic are pure and keep no shared state.

pub mod anchored;
pub mod api;
pub mod combine;
pub mod duration;
pub mod error;
pub mod render;
pub mod time;

pub use anchored::{compose_anchored, parse_date, AnchoredReport, AnchoredSpan, TIMESTAMP_FORMAT};
pub use api::{calculate_time, ApiResponse};
pub use combine::{combine, Combined};
pub use duration::{parse_duration, Components, Duration};
pub use error::{ClockError, ErrorKind, Result};
pub use render::{render_result, Style};
pub use time::{parse_time, Meridiem, Time};
