//! Calendar-side half of the booking flow: month rendering, day
//! selection and the day-availability search that hands off to the
//! results side.

use crate::surface::{CalendarDay, CalendarLegend, CalendarSurface, CalendarView, Notifier};
use skiff_domain::{
    AvailabilityApi, BoatAvailability, DateKey, DayAvailability, MonthDay, Notice, Severity,
};
use std::sync::Arc;

/// Owns the calendar state and drives the two availability lookups.
///
/// Every public operation completes normally; failures are converted to
/// notifications and leave the session state unchanged.
pub struct SearchSession {
    availability: Arc<dyn AvailabilityApi>,
    calendar: Arc<dyn CalendarSurface>,
    notifier: Arc<dyn Notifier>,
    theme: String,
    selected_date: Option<DateKey>,
    searcher_visible: bool,
    nav_pending: bool,
    /// Availability cache for the visible month.
    month_days: Vec<MonthDay>,
}

impl SearchSession {
    pub fn new(
        availability: Arc<dyn AvailabilityApi>,
        calendar: Arc<dyn CalendarSurface>,
        notifier: Arc<dyn Notifier>,
        theme: String,
    ) -> Self {
        Self {
            availability,
            calendar,
            notifier,
            theme,
            selected_date: None,
            searcher_visible: true,
            nav_pending: false,
            month_days: Vec::new(),
        }
    }

    pub fn selected_date(&self) -> Option<DateKey> {
        self.selected_date
    }

    pub fn searcher_visible(&self) -> bool {
        self.searcher_visible
    }

    /// Start a fresh search session showing the month containing `today`.
    pub async fn init(&mut self, today: DateKey) {
        self.selected_date = None;
        self.render_calendar(today).await;
    }

    /// Fetch availability for `anchor`'s month and re-render the grid.
    /// The month cache is only replaced on a successful lookup.
    pub async fn render_calendar(&mut self, anchor: DateKey) {
        match self.availability.month_availability(anchor).await {
            Ok(days) => {
                self.month_days = days;
                self.calendar.render(self.build_view(anchor));
            }
            Err(err) => {
                tracing::error!("month availability lookup failed: {err}");
                self.notifier
                    .notify(Severity::Alert, Notice::ServiceUnavailable);
            }
        }
    }

    fn build_view(&self, anchor: DateKey) -> CalendarView {
        let days = self
            .month_days
            .iter()
            .filter(|day| !day.disabled)
            .map(|day| CalendarDay {
                date: day.date.to_day_first(),
                level: day.level,
            })
            .collect();
        let disabled = self
            .month_days
            .iter()
            .filter(|day| day.disabled)
            .map(|day| day.date.to_day_first())
            .collect();
        CalendarView {
            anchor: anchor.to_day_first(),
            theme: self.theme.clone(),
            days,
            disabled,
            legend: CalendarLegend::default(),
        }
    }

    /// Record the day the user picked. Disabled days, and days outside
    /// the cached month, are rejected.
    pub fn select_day(&mut self, date: DateKey) -> bool {
        let enabled = self
            .month_days
            .iter()
            .any(|day| day.date == date && !day.disabled);
        if enabled {
            self.selected_date = Some(date);
        } else {
            tracing::debug!("rejected selection of unavailable day {date}");
        }
        enabled
    }

    /// Move the grid to another month/year. Ignored while a previous
    /// navigation is still in flight; the loader blocks the surface for
    /// the duration.
    pub async fn navigate(&mut self, day: u32, month: u32, year: i32) {
        if self.nav_pending {
            tracing::debug!("navigation already in flight, ignoring");
            return;
        }
        let anchor = match DateKey::from_ymd(year, month, day) {
            Ok(anchor) => anchor,
            Err(err) => {
                tracing::warn!("calendar sent an invalid navigation target: {err}");
                return;
            }
        };
        self.nav_pending = true;
        self.calendar.show_loader();
        self.render_calendar(anchor).await;
        self.calendar.hide_loader();
        self.nav_pending = false;
    }

    /// Search the selected day. On success the searcher is hidden and the
    /// boats are returned for the controller to hand to the results side;
    /// every other outcome notifies and keeps the searcher as it was.
    pub async fn search(
        &mut self,
        resident_discount: bool,
    ) -> Option<(DateKey, Vec<BoatAvailability>)> {
        let Some(date) = self.selected_date else {
            self.notifier.notify(Severity::Alert, Notice::DateRequired);
            return None;
        };

        self.calendar.show_loader();
        let outcome = self.availability.day_availability(date, resident_discount).await;
        self.calendar.hide_loader();

        match outcome {
            Ok(DayAvailability::Boats(boats)) => {
                tracing::info!("day {date} has {} boat(s) available", boats.len());
                self.searcher_visible = false;
                Some((date, boats))
            }
            Ok(DayAvailability::NoAvailability) => {
                self.notifier
                    .notify(Severity::Alert, Notice::NoAvailability);
                None
            }
            Err(err) => {
                tracing::error!("day availability lookup failed: {err}");
                self.notifier
                    .notify(Severity::Alert, Notice::ServiceUnavailable);
                None
            }
        }
    }

    /// Restart-transition target: show the searcher again, drop the old
    /// selection and re-seed the calendar at `date` when one is given.
    pub async fn resume(&mut self, date: Option<DateKey>) {
        self.searcher_visible = true;
        self.selected_date = None;
        if let Some(date) = date {
            self.render_calendar(date).await;
        }
    }
}
