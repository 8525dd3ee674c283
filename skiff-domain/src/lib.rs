pub mod api;
pub mod availability;
pub mod datekey;
pub mod models;
pub mod notice;

pub use api::{ApiError, AvailabilityApi, BookingApi};
pub use availability::{AvailabilityLevel, DayAvailability, MonthDay};
pub use datekey::{DateKey, DateKeyError};
pub use models::{Boat, BoatAvailability, BoatPhoto, BookingDraft, CheckoutSession, SlotOffer};
pub use notice::{Notice, Severity};
