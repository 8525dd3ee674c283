use crate::availability::{DayAvailability, MonthDay};
use crate::datekey::DateKey;
use crate::models::{BookingDraft, CheckoutSession};
use async_trait::async_trait;

/// Failures from the remote booking backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network, DNS, TLS).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("backend error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The backend reported a failure through its response envelope.
    #[error("backend reported failure: {0}")]
    Endpoint(String),
}

/// The two availability lookups the widget performs.
#[async_trait]
pub trait AvailabilityApi: Send + Sync {
    /// Availability for every day of the month containing `date`.
    async fn month_availability(&self, date: DateKey) -> Result<Vec<MonthDay>, ApiError>;

    /// Bookable boat/slot combinations for a single day, priced with or
    /// without the resident discount.
    async fn day_availability(
        &self,
        date: DateKey,
        resident_discount: bool,
    ) -> Result<DayAvailability, ApiError>;
}

/// Booking creation; returns the hosted-checkout session to redirect to.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn create_booking(&self, draft: &BookingDraft) -> Result<CheckoutSession, ApiError>;
}
