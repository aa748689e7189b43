use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::AvailabilityWindow;

/// Reasons a time range is rejected before it is sent anywhere.
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both a start time and an end time.")]
    MissingInput,
    #[error("\"{0}\" is not a valid time of day.")]
    MalformedTime(String),
    #[error("The end time must be later than the start time.")]
    InvalidRange,
}

/// Parse the value of an `<input type="time">`: `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(text: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| ValidationError::MalformedTime(trimmed.to_string()))
}

/// Combine two times of day with `date` and check that the range is non-empty.
pub fn validate_time_range(
    date: NaiveDate,
    start_text: &str,
    end_text: &str,
) -> Result<AvailabilityWindow, ValidationError> {
    if start_text.trim().is_empty() || end_text.trim().is_empty() {
        return Err(ValidationError::MissingInput);
    }

    let start_at = date.and_time(parse_time_of_day(start_text)?);
    let end_at = date.and_time(parse_time_of_day(end_text)?);

    if start_at >= end_at {
        return Err(ValidationError::InvalidRange);
    }

    Ok(AvailabilityWindow { start_at, end_at })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_valid_range_combines_with_date() {
        let window = validate_time_range(jan_10(), "09:00", "10:30").unwrap();
        assert_eq!(window.start_at, jan_10().and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(window.end_at, jan_10().and_hms_opt(10, 30, 0).unwrap());
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(validate_time_range(jan_10(), "", "10:30"), Err(ValidationError::MissingInput));
        assert_eq!(validate_time_range(jan_10(), "09:00", ""), Err(ValidationError::MissingInput));
        assert_eq!(validate_time_range(jan_10(), "  ", " "), Err(ValidationError::MissingInput));
    }

    #[test]
    fn test_missing_input_wins_over_malformed() {
        assert_eq!(validate_time_range(jan_10(), "junk", ""), Err(ValidationError::MissingInput));
    }

    #[test]
    fn test_invalid_range() {
        assert_eq!(validate_time_range(jan_10(), "09:00", "08:00"), Err(ValidationError::InvalidRange));
        assert_eq!(validate_time_range(jan_10(), "09:00", "09:00"), Err(ValidationError::InvalidRange));
    }

    #[test]
    fn test_one_minute_range_is_valid() {
        assert!(validate_time_range(jan_10(), "23:58", "23:59").is_ok());
    }

    #[test]
    fn test_parse_time_of_day_formats() {
        assert_eq!(parse_time_of_day("07:05").unwrap(), NaiveTime::from_hms_opt(7, 5, 0).unwrap());
        assert_eq!(parse_time_of_day("07:05:30").unwrap(), NaiveTime::from_hms_opt(7, 5, 30).unwrap());
        assert_eq!(parse_time_of_day(" 18:00 ").unwrap(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(
            parse_time_of_day("25:00"),
            Err(ValidationError::MalformedTime("25:00".to_string()))
        );
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            ValidationError::InvalidRange.to_string(),
            "The end time must be later than the start time."
        );
        assert_eq!(
            ValidationError::MalformedTime("9am".to_string()).to_string(),
            "\"9am\" is not a valid time of day."
        );
    }
}
