use israflight_core::models::Airport;

use crate::api::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct AirportsApi {
    api: ApiClient,
}

impl AirportsApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Airport>, ApiError> {
        self.api.get("airports").await
    }

    pub async fn get(&self, airport_id: i32) -> Result<Airport, ApiError> {
        self.api.get(&format!("airports/{}", airport_id)).await
    }
}
