//! Top-level controller. Owns both sessions and wires the handoffs
//! between them explicitly, so neither session ever reaches for the
//! other by name.

use crate::results::ResultsSession;
use crate::search::SearchSession;
use crate::surface::{CalendarSurface, CheckoutGateway, Notifier};
use skiff_domain::{AvailabilityApi, BookingApi, DateKey};
use std::sync::Arc;

/// The embeddable booking widget: one search session, one results
/// session, and the transitions between them. The host page forwards
/// user-input events to these methods.
pub struct BookingWidget {
    search: SearchSession,
    results: ResultsSession,
}

impl BookingWidget {
    pub fn new(
        availability: Arc<dyn AvailabilityApi>,
        bookings: Arc<dyn BookingApi>,
        calendar: Arc<dyn CalendarSurface>,
        notifier: Arc<dyn Notifier>,
        checkout: Arc<dyn CheckoutGateway>,
        theme: String,
    ) -> Self {
        Self {
            search: SearchSession::new(
                availability.clone(),
                calendar,
                notifier.clone(),
                theme,
            ),
            results: ResultsSession::new(availability, bookings, checkout, notifier),
        }
    }

    pub fn search_session(&self) -> &SearchSession {
        &self.search
    }

    pub fn results_session(&self) -> &ResultsSession {
        &self.results
    }

    /// Initialize the widget showing the month containing `today`.
    pub async fn init(&mut self, today: DateKey) {
        self.search.init(today).await;
    }

    /// Calendar day-selection callback.
    pub fn select_day(&mut self, date: DateKey) -> bool {
        self.search.select_day(date)
    }

    /// Calendar month/year-navigation callback.
    pub async fn navigate(&mut self, day: u32, month: u32, year: i32) {
        self.search.navigate(day, month, year).await;
    }

    /// Search the selected day and, on success, hand the boats over to
    /// the results session.
    pub async fn search(&mut self) {
        let discount = self.results.resident_discount();
        if let Some((date, boats)) = self.search.search(discount).await {
            self.results.render_results(date, boats);
        }
    }

    pub fn select_boat(&mut self, boat_id: i64) -> bool {
        self.results.select_boat(boat_id)
    }

    pub fn select_offer(&mut self, index: usize) -> bool {
        self.results.select_offer(index)
    }

    pub fn show_photo(&mut self, url: &str) {
        self.results.show_photo(url);
    }

    pub fn next_photo(&mut self) {
        self.results.next_photo();
    }

    pub fn set_customer_name(&mut self, name: &str) {
        self.results.set_customer_name(name);
    }

    pub fn set_customer_telephone(&mut self, telephone: &str) {
        self.results.set_customer_telephone(telephone);
    }

    pub fn set_legal_accepted(&mut self, accepted: bool) {
        self.results.set_legal_accepted(accepted);
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.results.set_terms_accepted(accepted);
    }

    /// Toggle the resident discount and refresh the shown prices so they
    /// stay consistent with it.
    pub async fn set_resident_discount(&mut self, apply: bool) {
        self.results.set_resident_discount(apply);
        self.results.update_prices().await;
    }

    /// Validate and initiate the hosted-checkout payment.
    pub async fn go_to_pay(&mut self) {
        self.results.go_to_pay().await;
    }

    /// Return from the results back to the searcher, re-seeding the
    /// calendar at the date that was searched.
    pub async fn restart_search(&mut self) {
        let date = self.results.restart();
        self.search.resume(date).await;
    }
}
