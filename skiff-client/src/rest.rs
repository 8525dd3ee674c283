//! Reqwest-backed implementation of the two remote-API traits.

use crate::wire::{BookingEnvelope, CreateBookingBody, DayEnvelope, MonthEnvelope};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use skiff_domain::{
    ApiError, AvailabilityApi, BookingApi, BookingDraft, CheckoutSession, DateKey, DayAvailability,
    MonthDay,
};

/// HTTP client for the booking backend.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AvailabilityApi for RestClient {
    async fn month_availability(&self, date: DateKey) -> Result<Vec<MonthDay>, ApiError> {
        let url = format!("{}/availability/month/{}/", self.base_url, date);
        tracing::debug!("fetching month availability: {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let envelope: MonthEnvelope = Self::decode(response).await?;
        envelope.into_domain()
    }

    async fn day_availability(
        &self,
        date: DateKey,
        resident_discount: bool,
    ) -> Result<DayAvailability, ApiError> {
        let url = format!(
            "{}/availability/day/{}/?apply_resident_discount={}",
            self.base_url,
            date,
            u8::from(resident_discount)
        );
        tracing::debug!("fetching day availability: {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let envelope: DayEnvelope = Self::decode(response).await?;
        Ok(envelope.into_domain())
    }
}

#[async_trait]
impl BookingApi for RestClient {
    async fn create_booking(&self, draft: &BookingDraft) -> Result<CheckoutSession, ApiError> {
        let url = format!("{}/create/booking/", self.base_url);
        let body = CreateBookingBody::from_draft(draft);
        tracing::info!(
            "creating booking for {} slot(s) at {}",
            draft.slot_ids.len(),
            draft.price
        );

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let envelope: BookingEnvelope = Self::decode(response).await?;
        envelope.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = RestClient::new("https://example.com/api/");
        assert_eq!(client.base_url, "https://example.com/api");
    }
}
