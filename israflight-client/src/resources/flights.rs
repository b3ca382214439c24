use israflight_core::models::Flight;
use israflight_core::validation::require_id;
use serde_json::Value;
use tracing::info;

use crate::api::ApiClient;
use crate::error::ApiError;

/// Flight schedule administration and lookup.
#[derive(Debug, Clone)]
pub struct FlightsApi {
    api: ApiClient,
}

impl FlightsApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Flight>, ApiError> {
        self.api.get("flights").await
    }

    pub async fn get(&self, flight_id: i32) -> Result<Flight, ApiError> {
        require_id("flight", flight_id)?;
        self.api.get(&format!("flights/{}", flight_id)).await
    }

    pub async fn create(&self, flight: &Flight) -> Result<Flight, ApiError> {
        require_id("plane", flight.plane_id)?;
        let created: Flight = self.api.post("flights", flight).await?;
        info!("Flight scheduled: {:?}", created.id);
        Ok(created)
    }

    /// The backend answers `204 No Content`, so there is nothing to return.
    pub async fn update(&self, flight_id: i32, flight: &Flight) -> Result<(), ApiError> {
        require_id("flight", flight_id)?;
        self.api
            .put::<_, Value>(&format!("flights/{}", flight_id), flight)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, flight_id: i32) -> Result<bool, ApiError> {
        require_id("flight", flight_id)?;
        self.api.delete(&format!("flights/{}", flight_id)).await
    }
}
