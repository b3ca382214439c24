use israflight_core::models::{AuthAccount, FrequentFlyer, FREQUENT_FLYER_ROLE};
use israflight_core::validation::{require_id, validate_registration};
use serde_json::Value;
use tracing::info;

use crate::api::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct FrequentFlyersApi {
    api: ApiClient,
}

impl FrequentFlyersApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Creates the profile, then the login account for it.
    ///
    /// The two calls are not atomic: if the second fails the profile stays
    /// on the backend and the error is returned as is.
    pub async fn register(&self, profile: &FrequentFlyer) -> Result<FrequentFlyer, ApiError> {
        validate_registration(profile)?;

        let created: FrequentFlyer = self.api.post("frequentflyers", profile).await?;

        let account = AuthAccount {
            username: profile.username.clone(),
            password: profile.password.clone(),
            role: FREQUENT_FLYER_ROLE.to_string(),
        };
        self.api.post::<_, Value>("auths", &account).await?;

        info!(user = %created.username, "Frequent flyer registered");
        Ok(created)
    }

    pub async fn get(&self, flyer_id: i32) -> Result<FrequentFlyer, ApiError> {
        require_id("traveler", flyer_id)?;
        self.api.get(&format!("frequentflyers/{}", flyer_id)).await
    }
}
