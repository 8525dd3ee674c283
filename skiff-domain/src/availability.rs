use crate::datekey::DateKey;
use crate::models::BoatAvailability;
use serde::{Deserialize, Serialize};

/// How booked a calendar day is. Closed set; the wire labels are the
/// serde `snake_case` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityLevel {
    Free,
    PartiallyFree,
    Full,
}

impl AvailabilityLevel {
    /// Fixed legend color for this level.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Free => "#28A745",
            Self::PartiallyFree => "#BA8B00",
            Self::Full => "#DC3545",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::PartiallyFree => "partially_free",
            Self::Full => "full",
        }
    }
}

/// One day of the visible month, as reported by the month endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthDay {
    pub date: DateKey,
    pub disabled: bool,
    pub level: AvailabilityLevel,
}

/// Outcome of a day-availability lookup. The endpoint flags a day with no
/// bookable boats as an error-carrying response; that is data here, not a
/// transport failure.
#[derive(Debug, Clone, PartialEq)]
pub enum DayAvailability {
    Boats(Vec<BoatAvailability>),
    NoAvailability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_wire_labels() {
        assert_eq!(
            serde_json::from_str::<AvailabilityLevel>("\"partially_free\"").unwrap(),
            AvailabilityLevel::PartiallyFree
        );
        assert_eq!(
            serde_json::to_string(&AvailabilityLevel::Free).unwrap(),
            "\"free\""
        );
    }

    #[test]
    fn test_level_colors_are_fixed() {
        assert_eq!(AvailabilityLevel::Free.color(), "#28A745");
        assert_eq!(AvailabilityLevel::PartiallyFree.color(), "#BA8B00");
        assert_eq!(AvailabilityLevel::Full.color(), "#DC3545");
    }
}
