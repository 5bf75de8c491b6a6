//! Request handling for the `POST /api/calculate_time` body contract.
//!
//! [`calculate_time`] takes the raw request body and returns a status code
//! with a JSON body. It binds no socket; a server or the CLI supplies the
//! transport.
//!
//! # Request
//!
//! ```json
//! {
//!   "initial_time": "H:MM AM/PM or HH:MM",
//!   "duration": "D days, H:MM:SS | H:MM:SS | H:MM | :SS",
//!   "days_offset": 1,
//!   "start_date": "YYYY-MM-DD"
//! }
//! ```
//!
//! `days_offset` (integer or integer string) and `start_date` are optional.
//!
//! # Response
//!
//! 200 with `result_string`, `calculated_time` and `days_numeric`, plus
//! `start_datetime_str`, `end_datetime_str` and `duration_details_str` when a
//! start date was given. Otherwise 400 with `{"error": "<message>"}`.

use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::anchored::{compose_anchored, parse_date};
use crate::combine::combine;
use crate::duration::parse_duration;
use crate::error::ClockError;
use crate::render::{render_result, Style};
use crate::time::parse_time;

pub const INVALID_PAYLOAD_MESSAGE: &str =
    "Invalid JSON payload or Content-Type (must be application/json and valid JSON)";

/// Status code and JSON body for a handled request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[derive(Error, Debug)]
enum RequestError {
    #[error("{}", INVALID_PAYLOAD_MESSAGE)]
    Payload,

    #[error("Missing '{0}'")]
    Missing(&'static str),

    #[error("Invalid format for days_offset, must be a string representing an integer.")]
    OffsetFormat,

    #[error("Invalid type for days_offset, must be an integer or a string representing an integer.")]
    OffsetType,

    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// Handle a calculate-time request body.
///
/// # Examples
///
/// ```
/// use timecalc::api::calculate_time;
///
/// let response = calculate_time(r#"{"initial_time": "2:00 PM", "duration": "1:30"}"#);
/// assert_eq!(response.status, 200);
/// assert_eq!(response.body["result_string"], "3:30 PM");
/// ```
pub fn calculate_time(body: &str) -> ApiResponse {
    match handle(body) {
        Ok(body) => ApiResponse { status: 200, body },
        Err(e) => {
            tracing::warn!(error = %e, "rejected calculate_time request");
            ApiResponse {
                status: 400,
                body: json!({ "error": e.to_string() }),
            }
        }
    }
}

fn handle(body: &str) -> Result<Value, RequestError> {
    let payload = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => map,
        _ => return Err(RequestError::Payload),
    };

    let initial_time = required_field(&payload, "initial_time")?;
    let duration = required_field(&payload, "duration")?;
    tracing::debug!(?initial_time, ?duration, "calculating time");

    let time = match initial_time.as_str() {
        Some(s) => parse_time(s)?,
        None => return Err(ClockError::InvalidTimeFormat.into()),
    };
    let duration = match duration.as_str() {
        Some(s) => parse_duration(s)?,
        None => return Err(ClockError::InvalidDurationFormat(duration.to_string()).into()),
    };
    let day_offset = day_offset(payload.get("days_offset"))?;

    let combined = combine(time, &duration)?;
    let total_days = combined.total_days(day_offset)?;

    let mut response = Map::new();
    response.insert(
        "result_string".into(),
        json!(render_result(combined.time, total_days, Style::Web)),
    );
    response.insert("calculated_time".into(), json!(combined.time));
    response.insert("days_numeric".into(), json!(total_days));

    if let Some(start_date) = optional_field(&payload, "start_date") {
        let date = match start_date.as_str() {
            Some(s) => parse_date(s)?,
            None => return Err(ClockError::InvalidDate(start_date.to_string()).into()),
        };
        let report = compose_anchored(time, &duration, date, day_offset)?.report();
        response.insert("start_datetime_str".into(), json!(report.start_datetime_str));
        response.insert("end_datetime_str".into(), json!(report.end_datetime_str));
        response.insert(
            "duration_details_str".into(),
            json!(report.duration_details_str),
        );
    }

    Ok(Value::Object(response))
}

/// Null, `false`, `0`, and empty strings, arrays or objects count as missing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn required_field<'a>(
    payload: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Value, RequestError> {
    optional_field(payload, name).ok_or(RequestError::Missing(name))
}

fn optional_field<'a>(payload: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    payload.get(name).filter(|value| !is_blank(value))
}

fn day_offset(value: Option<&Value>) -> Result<i64, RequestError> {
    match value {
        None => Ok(0),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(offset) => Ok(offset),
            None if n.is_u64() => Err(ClockError::DayOffsetOutOfRange.into()),
            None => Err(RequestError::OffsetType),
        },
        Some(Value::String(s)) => s.trim().parse().map_err(|_| RequestError::OffsetFormat),
        Some(_) => Err(RequestError::OffsetType),
    }
}
