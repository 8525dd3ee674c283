//! Traits for the host-page collaborators: the calendar-rendering
//! library, the toast/notification library and the hosted-checkout
//! payment library. The widget only ever talks to them through these
//! seams; the host wires in concrete adapters.

use async_trait::async_trait;
use serde::Serialize;
use skiff_domain::{AvailabilityLevel, CheckoutSession, Notice, Severity};

/// One selectable day of the rendered month grid. The date is in the
/// day-first `DD-MM-YYYY` form the calendar library expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: String,
    pub level: AvailabilityLevel,
}

/// The fixed three-color legend shown next to the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarLegend {
    pub free: &'static str,
    pub partially_free: &'static str,
    pub full: &'static str,
}

impl Default for CalendarLegend {
    fn default() -> Self {
        Self {
            free: AvailabilityLevel::Free.color(),
            partially_free: AvailabilityLevel::PartiallyFree.color(),
            full: AvailabilityLevel::Full.color(),
        }
    }
}

/// Everything the calendar library needs to (re-)render one month.
/// All date strings are day-first; this struct is the only place the
/// widget emits that form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarView {
    /// Anchor date whose month is shown, `DD-MM-YYYY`.
    pub anchor: String,
    pub theme: String,
    pub days: Vec<CalendarDay>,
    /// Unselectable dates, `DD-MM-YYYY`.
    pub disabled: Vec<String>,
    pub legend: CalendarLegend,
}

/// The month-grid rendering surface.
pub trait CalendarSurface: Send + Sync {
    fn render(&self, view: CalendarView);

    /// Replace the calendar with a blocking loader.
    fn show_loader(&self);

    /// Restore the calendar after the loader.
    fn hide_loader(&self);
}

/// Transient, auto-dismissing user-facing toasts.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, notice: Notice);
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// The hosted checkout session could not be entered.
    #[error("checkout redirect failed: {0}")]
    Redirect(String),
}

/// Redirects the browser to the hosted checkout page.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn redirect_to_checkout(&self, session: &CheckoutSession) -> Result<(), CheckoutError>;
}
