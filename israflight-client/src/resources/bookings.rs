use israflight_core::models::{Booking, BookingRequest};
use israflight_core::validation::require_id;
use serde::Serialize;

use crate::api::ApiClient;
use crate::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserFilter {
    user_id: i32,
}

#[derive(Debug, Clone)]
pub struct BookingsApi {
    api: ApiClient,
}

impl BookingsApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submits a booking. A refusal comes back as [`ApiError::Status`] with
    /// the backend's error envelope as body.
    pub async fn create(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        require_id("traveler", request.frequent_flyer_id)?;
        require_id("flight", request.flight_id)?;
        self.api.post("bookings", request).await
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Booking>, ApiError> {
        require_id("traveler", user_id)?;
        self.api
            .get_with_query("bookings", &UserFilter { user_id })
            .await
    }

    pub async fn get(&self, booking_id: i32) -> Result<Booking, ApiError> {
        require_id("booking", booking_id)?;
        self.api.get(&format!("bookings/{}", booking_id)).await
    }

    pub async fn delete(&self, booking_id: i32) -> Result<bool, ApiError> {
        require_id("booking", booking_id)?;
        self.api.delete(&format!("bookings/{}", booking_id)).await
    }
}
