//! Wire shapes of the three backend endpoints and their conversion into
//! domain types. Day-first date strings are parsed into `DateKey` here,
//! at the boundary, and nowhere else.

use serde::{Deserialize, Serialize};
use skiff_domain::{
    ApiError, AvailabilityLevel, Boat, BoatAvailability, BookingDraft, CheckoutSession, DateKey,
    DayAvailability, MonthDay, SlotOffer,
};

#[derive(Debug, Deserialize)]
pub(crate) struct MonthEnvelope {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub data: Vec<WireMonthDay>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMonthDay {
    /// Day-first `DD-MM-YYYY`, possibly unpadded.
    pub date: String,
    pub disabled: bool,
    pub name: AvailabilityLevel,
}

impl MonthEnvelope {
    pub(crate) fn into_domain(self) -> Result<Vec<MonthDay>, ApiError> {
        if self.error {
            return Err(ApiError::Endpoint(
                "month availability lookup failed".to_string(),
            ));
        }
        self.data
            .into_iter()
            .map(|day| {
                let date = DateKey::parse_day_first(&day.date)
                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                Ok(MonthDay {
                    date,
                    disabled: day.disabled,
                    level: day.name,
                })
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DayEnvelope {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub data: Vec<WireBoatAvailability>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireBoatAvailability {
    pub boat: Boat,
    #[serde(default)]
    pub availability: Vec<WireSlotOffer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSlotOffer {
    pub slots: Vec<WireSlot>,
    pub price: f64,
    pub from_hour: String,
    pub to_hour: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSlot {
    pub id: i64,
}

impl DayEnvelope {
    pub(crate) fn into_domain(self) -> DayAvailability {
        if self.error {
            return DayAvailability::NoAvailability;
        }
        let boats = self
            .data
            .into_iter()
            .map(|entry| BoatAvailability {
                boat: entry.boat,
                offers: entry
                    .availability
                    .into_iter()
                    .map(|offer| SlotOffer {
                        slot_ids: offer.slots.into_iter().map(|s| s.id).collect(),
                        price: offer.price,
                        from_hour: offer.from_hour,
                        to_hour: offer.to_hour,
                    })
                    .collect(),
            })
            .collect();
        DayAvailability::Boats(boats)
    }
}

/// Booking-creation request body. The backend parses `slot_ids` as a
/// comma-separated string, so the draft's id list is joined here.
#[derive(Debug, Serialize)]
pub(crate) struct CreateBookingBody {
    pub price: f64,
    pub slot_ids: String,
    pub customer_name: String,
    pub customer_telephone_number: String,
}

impl CreateBookingBody {
    pub(crate) fn from_draft(draft: &BookingDraft) -> Self {
        Self {
            price: draft.price,
            slot_ids: draft
                .slot_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
            customer_name: draft.customer_name.clone(),
            customer_telephone_number: draft.customer_telephone_number.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookingEnvelope {
    #[serde(default)]
    pub error: bool,
    pub data: Option<WireCheckoutSession>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCheckoutSession {
    pub session_id: String,
}

impl BookingEnvelope {
    pub(crate) fn into_domain(self) -> Result<CheckoutSession, ApiError> {
        if self.error {
            return Err(ApiError::Endpoint("booking creation failed".to_string()));
        }
        let session = self
            .data
            .ok_or_else(|| ApiError::Decode("booking response had no data".to_string()))?;
        Ok(CheckoutSession {
            session_id: session.session_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_envelope_parses_day_first_dates() {
        let raw = r#"{
            "error": false,
            "data": [
                {"date": "3-5-2024", "disabled": true, "name": "full"},
                {"date": "04-05-2024", "disabled": false, "name": "free"}
            ]
        }"#;
        let envelope: MonthEnvelope = serde_json::from_str(raw).unwrap();
        let days = envelope.into_domain().unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date.to_string(), "2024-05-03");
        assert!(days[0].disabled);
        assert_eq!(days[1].level, AvailabilityLevel::Free);
        assert!(!days[1].disabled);
    }

    #[test]
    fn test_day_envelope_error_flag_means_no_availability() {
        let raw = r#"{"error": true, "data": []}"#;
        let envelope: DayEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.into_domain(), DayAvailability::NoAvailability);
    }

    #[test]
    fn test_day_envelope_flattens_slot_ids() {
        let raw = r#"{
            "data": [
                {
                    "boat": {"id": 1, "name": "Joy", "photos": [{"url": "a.jpg"}]},
                    "availability": [
                        {"slots": [{"id": 7}, {"id": 8}], "price": 50.0,
                         "from_hour": "10:00", "to_hour": "14:00"}
                    ]
                }
            ]
        }"#;
        let envelope: DayEnvelope = serde_json::from_str(raw).unwrap();
        let DayAvailability::Boats(boats) = envelope.into_domain() else {
            panic!("expected boats");
        };
        assert_eq!(boats.len(), 1);
        assert_eq!(boats[0].boat.name, "Joy");
        assert_eq!(boats[0].offers[0].slot_ids, vec![7, 8]);
        assert_eq!(boats[0].offers[0].price, 50.0);
    }

    #[test]
    fn test_booking_body_joins_slot_ids() {
        let draft = BookingDraft {
            price: 50.0,
            slot_ids: vec![7, 8, 9],
            customer_name: "Ada".to_string(),
            customer_telephone_number: "600000000".to_string(),
        };
        let body = CreateBookingBody::from_draft(&draft);
        assert_eq!(body.slot_ids, "7,8,9");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["slot_ids"], "7,8,9");
        assert_eq!(json["price"], 50.0);
    }

    #[test]
    fn test_booking_envelope_extracts_session() {
        let raw = r#"{"error": false, "data": {"id": 3, "status": "pending", "session_id": "cs_123"}}"#;
        let envelope: BookingEnvelope = serde_json::from_str(raw).unwrap();
        let session = envelope.into_domain().unwrap();
        assert_eq!(session.session_id, "cs_123");
    }
}
