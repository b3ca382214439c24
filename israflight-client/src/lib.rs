pub mod api;
pub mod app_config;
pub mod booking;
pub mod error;
pub mod resources;

pub use api::ApiClient;
pub use booking::{BookingGateway, BookingOutcome, BookingService, RestBookingGateway};
pub use error::ApiError;
