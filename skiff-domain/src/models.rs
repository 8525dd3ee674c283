use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoatPhoto {
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photos: Vec<BoatPhoto>,
}

/// One purchasable combination of time slots for a boat on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotOffer {
    pub slot_ids: Vec<i64>,
    pub price: f64,
    pub from_hour: String,
    pub to_hour: String,
}

/// A boat plus the slot offers it has for the searched date. An empty
/// offer list means the boat is shown but cannot be selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoatAvailability {
    pub boat: Boat,
    pub offers: Vec<SlotOffer>,
}

/// Payload for booking creation; built only after every validation gate
/// in `go_to_pay` has passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub price: f64,
    pub slot_ids: Vec<i64>,
    pub customer_name: String,
    pub customer_telephone_number: String,
}

/// Hosted-checkout session identifier issued by booking creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub session_id: String,
}
