pub mod controller;
pub mod results;
pub mod search;
pub mod surface;

pub use controller::BookingWidget;
pub use results::ResultsSession;
pub use search::SearchSession;
pub use surface::{
    CalendarDay, CalendarLegend, CalendarSurface, CalendarView, CheckoutError, CheckoutGateway,
    Notifier,
};
