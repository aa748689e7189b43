use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

pub mod planner;
pub mod validation;
pub mod week;

pub use planner::{FormPhase, PlannerState, SubmitError};
pub use validation::{parse_time_of_day, validate_time_range, ValidationError};
pub use week::{compute_week_days, shift_week, start_of_week, week_number, week_title, WeekDay, WeekDirection};

/// A block of free time belonging to a guide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Server-assigned identifier (string or integer on the wire)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Local start timestamp
    #[serde(with = "iso_local")]
    pub start_at: NaiveDateTime,
    /// Local end timestamp
    #[serde(with = "iso_local")]
    pub end_at: NaiveDateTime,
    /// Marks the record created most recently in this session. Never sent or received.
    #[serde(skip)]
    pub added: bool,
}

/// Start/end pair submitted for a new availability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindow {
    #[serde(with = "iso_local")]
    pub start_at: NaiveDateTime,
    #[serde(with = "iso_local")]
    pub end_at: NaiveDateTime,
}

/// Body of `POST /api/v1/availabilities`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAvailabilityRequest {
    pub guide_id: String,
    pub availability: AvailabilityWindow,
}

impl Availability {
    pub fn duration(&self) -> Duration {
        self.end_at - self.start_at
    }

    /// e.g. "Wed Jan 10"
    pub fn day_label(&self) -> String {
        self.start_at.format("%a %b %-d").to_string()
    }

    /// e.g. "09:00 - 10:30"
    pub fn time_range_label(&self) -> String {
        format!("{} - {}", self.start_at.format("%H:%M"), self.end_at.format("%H:%M"))
    }
}

/// Sort ascending by start time. Ties keep their current relative order.
pub fn sort_by_start(availabilities: &mut [Availability]) {
    availabilities.sort_by_key(|availability| availability.start_at);
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// ISO-8601 local timestamps: written as `YYYY-MM-DDTHH:MM:SS`, read either
/// without an offset or as RFC 3339 (converted to local time).
pub mod iso_local {
    use chrono::{DateTime, Local, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(serde::de::Error::custom)
    }

    pub fn parse(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(text) {
            Ok(with_offset) => Ok(with_offset.with_timezone(&Local).naive_local()),
            Err(_) => text.parse::<NaiveDateTime>(),
        }
    }
}
