//! One accessor per backend controller. Each wraps a shared [`ApiClient`].
//!
//! [`ApiClient`]: crate::api::ApiClient

pub mod airports;
pub mod arrivals;
pub mod auth;
pub mod bookings;
pub mod flights;
pub mod frequent_flyers;
pub mod planes;

pub use airports::AirportsApi;
pub use arrivals::ArrivalsApi;
pub use auth::AuthApi;
pub use bookings::BookingsApi;
pub use flights::FlightsApi;
pub use frequent_flyers::FrequentFlyersApi;
pub use planes::PlanesApi;
