use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical calendar date used everywhere inside the widget.
///
/// Session state only ever holds a `DateKey`; the day-first string form
/// (`DD-MM-YYYY`) used by the calendar surface and the month endpoint is
/// produced and consumed at those boundaries only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a key from numeric components, as delivered by calendar
    /// navigation callbacks.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateKeyError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateKeyError::OutOfRange { year, month, day })
    }

    /// Parse the internal `YYYY-MM-DD` form. Unpadded month/day components
    /// are accepted.
    pub fn parse_internal(s: &str) -> Result<Self, DateKeyError> {
        let (y, m, d) = split_components(s)?;
        Self::from_ymd(y, m, d)
    }

    /// Parse the day-first `DD-MM-YYYY` form emitted by the month
    /// availability endpoint. Unpadded components are accepted.
    pub fn parse_day_first(s: &str) -> Result<Self, DateKeyError> {
        let (d, m, y) = split_components(s)?;
        Self::from_ymd(y as i32, m, d as u32)
    }

    /// Zero-padded `DD-MM-YYYY`, for the calendar-library boundary.
    pub fn to_day_first(&self) -> String {
        format!(
            "{:02}-{:02}-{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

fn split_components(s: &str) -> Result<(i32, u32, u32), DateKeyError> {
    let mut parts = s.splitn(3, '-');
    let a = parts.next().unwrap_or_default();
    let b = parts.next().unwrap_or_default();
    let c = parts.next().unwrap_or_default();
    if a.is_empty() || b.is_empty() || c.is_empty() {
        return Err(DateKeyError::Malformed(s.to_string()));
    }
    let a = a
        .parse::<i32>()
        .map_err(|_| DateKeyError::Malformed(s.to_string()))?;
    let b = b
        .parse::<u32>()
        .map_err(|_| DateKeyError::Malformed(s.to_string()))?;
    let c = c
        .parse::<u32>()
        .map_err(|_| DateKeyError::Malformed(s.to_string()))?;
    Ok((a, b, c))
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_internal(&value)
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.to_string()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateKeyError {
    #[error("malformed date string: {0}")]
    Malformed(String),

    #[error("no such calendar date: year {year}, month {month}, day {day}")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_first_round_trip() {
        let key = DateKey::parse_day_first("04-05-2024").unwrap();
        assert_eq!(key.to_string(), "2024-05-04");
        assert_eq!(key.to_day_first(), "04-05-2024");
    }

    #[test]
    fn test_unpadded_components_are_zero_padded() {
        let key = DateKey::parse_day_first("3-5-2024").unwrap();
        assert_eq!(key.to_day_first(), "03-05-2024");
        assert_eq!(key.to_string(), "2024-05-03");

        let key = DateKey::parse_internal("2024-5-3").unwrap();
        assert_eq!(key.to_string(), "2024-05-03");
    }

    #[test]
    fn test_internal_round_trip_through_day_first() {
        for raw in ["2024-01-01", "2024-12-31", "2023-02-28"] {
            let key = DateKey::parse_internal(raw).unwrap();
            let back = DateKey::parse_day_first(&key.to_day_first()).unwrap();
            assert_eq!(key, back);
        }
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(DateKey::parse_internal("not-a-date").is_err());
        assert!(DateKey::parse_internal("2024-05").is_err());
        assert!(DateKey::parse_day_first("32-01-2024").is_err());
        assert_eq!(
            DateKey::from_ymd(2024, 2, 30),
            Err(DateKeyError::OutOfRange {
                year: 2024,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn test_serde_uses_internal_form() {
        let key = DateKey::parse_internal("2024-05-04").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-05-04\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
