//! Results side of the booking flow: boat/offer presentation, the photo
//! gallery cursor, consent and contact fields, price refresh and the
//! checkout handoff.

use crate::surface::{CheckoutGateway, Notifier};
use skiff_domain::{
    ApiError, AvailabilityApi, BoatAvailability, BookingApi, BookingDraft, DateKey,
    DayAvailability, Notice, Severity, SlotOffer,
};
use std::sync::Arc;

/// Owns the post-search state. Rebuilt wholesale by every new search,
/// cleared on restart.
pub struct ResultsSession {
    availability: Arc<dyn AvailabilityApi>,
    bookings: Arc<dyn BookingApi>,
    checkout: Arc<dyn CheckoutGateway>,
    notifier: Arc<dyn Notifier>,
    selected_date: Option<DateKey>,
    results_visible: bool,
    boats: Vec<BoatAvailability>,
    selected_boat: Option<BoatAvailability>,
    selected_offer: Option<SlotOffer>,
    selected_photo_url: String,
    customer_name: String,
    customer_telephone_number: String,
    legal_accepted: bool,
    terms_accepted: bool,
    resident_discount: bool,
    /// Monotonic tag for price refreshes; only the newest response wins.
    refresh_seq: u64,
}

impl ResultsSession {
    pub fn new(
        availability: Arc<dyn AvailabilityApi>,
        bookings: Arc<dyn BookingApi>,
        checkout: Arc<dyn CheckoutGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            availability,
            bookings,
            checkout,
            notifier,
            selected_date: None,
            results_visible: false,
            boats: Vec::new(),
            selected_boat: None,
            selected_offer: None,
            selected_photo_url: String::new(),
            customer_name: String::new(),
            customer_telephone_number: String::new(),
            legal_accepted: false,
            terms_accepted: false,
            resident_discount: false,
            refresh_seq: 0,
        }
    }

    pub fn selected_date(&self) -> Option<DateKey> {
        self.selected_date
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn boats(&self) -> &[BoatAvailability] {
        &self.boats
    }

    pub fn selected_boat(&self) -> Option<&BoatAvailability> {
        self.selected_boat.as_ref()
    }

    pub fn selected_offer(&self) -> Option<&SlotOffer> {
        self.selected_offer.as_ref()
    }

    pub fn selected_photo_url(&self) -> &str {
        &self.selected_photo_url
    }

    pub fn legal_accepted(&self) -> bool {
        self.legal_accepted
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn resident_discount(&self) -> bool {
        self.resident_discount
    }

    /// Replace the boat list for a freshly searched date. Any previous
    /// boat/offer/photo selection is dropped: the new list may carry
    /// different prices, so a stale offer must never survive a re-render.
    /// Consents and contact fields are kept (they survive a discount
    /// refresh).
    pub fn render_results(&mut self, date: DateKey, boats: Vec<BoatAvailability>) {
        self.selected_date = Some(date);
        self.boats = boats;
        self.selected_boat = None;
        self.selected_offer = None;
        self.selected_photo_url.clear();
        self.results_visible = true;
    }

    /// Select a boat from the rendered list. Boats with no offers are
    /// displayable but not selectable. Changing boat drops the offer
    /// selection; the photo cursor is left alone.
    pub fn select_boat(&mut self, boat_id: i64) -> bool {
        let Some(entry) = self.boats.iter().find(|b| b.boat.id == boat_id) else {
            tracing::debug!("boat {boat_id} is not in the current results");
            return false;
        };
        if entry.offers.is_empty() {
            tracing::debug!("boat {boat_id} has no offers and cannot be selected");
            return false;
        }
        if self
            .selected_boat
            .as_ref()
            .map(|b| b.boat.id != boat_id)
            .unwrap_or(false)
        {
            self.selected_offer = None;
        }
        self.selected_boat = Some(entry.clone());
        true
    }

    /// Select one of the selected boat's slot offers by its position in
    /// the rendered list.
    pub fn select_offer(&mut self, index: usize) -> bool {
        let Some(boat) = &self.selected_boat else {
            return false;
        };
        match boat.offers.get(index) {
            Some(offer) => {
                self.selected_offer = Some(offer.clone());
                true
            }
            None => false,
        }
    }

    pub fn show_photo(&mut self, url: &str) {
        self.selected_photo_url = url.to_string();
    }

    /// Advance the gallery to the photo after the current one, wrapping
    /// to the first after the last. No-op without a selected boat or when
    /// the current photo is not part of the boat's gallery.
    pub fn next_photo(&mut self) {
        let Some(boat) = &self.selected_boat else {
            return;
        };
        let photos = &boat.boat.photos;
        if let Some(pos) = photos
            .iter()
            .position(|photo| photo.url == self.selected_photo_url)
        {
            let next = (pos + 1) % photos.len();
            self.selected_photo_url = photos[next].url.clone();
        }
    }

    pub fn set_customer_name(&mut self, name: &str) {
        self.customer_name = name.to_string();
    }

    pub fn set_customer_telephone(&mut self, telephone: &str) {
        self.customer_telephone_number = telephone.to_string();
    }

    pub fn set_legal_accepted(&mut self, accepted: bool) {
        self.legal_accepted = accepted;
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    pub fn set_resident_discount(&mut self, apply: bool) {
        self.resident_discount = apply;
    }

    /// Re-fetch the day's offers with the current discount flag so the
    /// shown prices stay consistent with the toggle. Responses are tagged
    /// with a monotonic sequence number and only the newest one is
    /// applied.
    pub async fn update_prices(&mut self) {
        let Some(date) = self.selected_date else {
            return;
        };
        let seq = self.begin_refresh();
        let outcome = self
            .availability
            .day_availability(date, self.resident_discount)
            .await;
        self.apply_refresh(seq, date, outcome);
    }

    pub(crate) fn begin_refresh(&mut self) -> u64 {
        self.refresh_seq += 1;
        self.refresh_seq
    }

    pub(crate) fn apply_refresh(
        &mut self,
        seq: u64,
        date: DateKey,
        outcome: Result<DayAvailability, ApiError>,
    ) {
        if seq != self.refresh_seq {
            tracing::debug!("discarding stale price refresh (seq {seq} < {})", self.refresh_seq);
            return;
        }
        match outcome {
            Ok(DayAvailability::Boats(boats)) => self.render_results(date, boats),
            Ok(DayAvailability::NoAvailability) => {
                self.notifier
                    .notify(Severity::Alert, Notice::NoAvailability);
            }
            Err(err) => {
                tracing::error!("price refresh failed: {err}");
                self.notifier
                    .notify(Severity::Alert, Notice::ServiceUnavailable);
            }
        }
    }

    /// Validate and initiate payment. The gates run in a fixed order and
    /// the first failure shows exactly one alert: legal advice, terms,
    /// offer selection, customer name. Once they all pass the booking is
    /// created and the browser is redirected to the hosted checkout; a
    /// redirect failure at that point is reported as a payment error (the
    /// booking already exists server-side).
    pub async fn go_to_pay(&mut self) {
        if !self.legal_accepted {
            self.notifier
                .notify(Severity::Alert, Notice::LegalAdviceRequired);
            return;
        }
        if !self.terms_accepted {
            self.notifier
                .notify(Severity::Alert, Notice::TermsNotAccepted);
            return;
        }
        let Some(offer) = self.selected_offer.clone() else {
            self.notifier
                .notify(Severity::Alert, Notice::PricingOptionRequired);
            return;
        };
        if self.customer_name.trim().is_empty() {
            self.notifier
                .notify(Severity::Alert, Notice::ClientNameRequired);
            return;
        }

        let draft = BookingDraft {
            price: offer.price,
            slot_ids: offer.slot_ids,
            customer_name: self.customer_name.clone(),
            customer_telephone_number: self.customer_telephone_number.clone(),
        };

        let session = match self.bookings.create_booking(&draft).await {
            Ok(session) => session,
            Err(err) => {
                tracing::error!("booking creation failed: {err}");
                self.notifier
                    .notify(Severity::Alert, Notice::ServiceUnavailable);
                return;
            }
        };

        tracing::info!("booking created, redirecting to checkout {}", session.session_id);
        if let Err(err) = self.checkout.redirect_to_checkout(&session).await {
            tracing::error!("checkout redirect failed: {err}");
            self.notifier.notify(Severity::Error, Notice::PaymentError);
        }
    }

    /// Sole transition back to the search side: hide the results, clear
    /// both consents and all selection state, and give back the searched
    /// date so the controller can re-seed the calendar with it.
    pub fn restart(&mut self) -> Option<DateKey> {
        self.results_visible = false;
        self.legal_accepted = false;
        self.terms_accepted = false;
        self.boats.clear();
        self.selected_boat = None;
        self.selected_offer = None;
        self.selected_photo_url.clear();
        self.selected_date.take()
    }
}
