use israflight_core::arrivals::{Arrival, ArrivalsPayload};
use israflight_core::validation::validate_hours_ahead;
use serde::Serialize;
use tracing::info;

use crate::api::ApiClient;
use crate::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArrivalsQuery {
    hours_ahead: u32,
}

#[derive(Debug, Clone)]
pub struct ArrivalsApi {
    api: ApiClient,
}

impl ArrivalsApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Arrivals landing within the next `hours_ahead` hours (1 to 5).
    pub async fn arrivals(&self, hours_ahead: u32) -> Result<Vec<Arrival>, ApiError> {
        let hours_ahead = validate_hours_ahead(hours_ahead)?;
        let payload: ArrivalsPayload = self
            .api
            .get_with_query("flights/arrivals", &ArrivalsQuery { hours_ahead })
            .await?;

        let arrivals = payload.into_arrivals();
        info!("Fetched {} arrivals", arrivals.len());
        Ok(arrivals)
    }
}
