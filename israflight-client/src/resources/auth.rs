use israflight_core::models::{AuthUser, Credentials};
use israflight_core::validation::validate_login;
use serde::Deserialize;
use tracing::info;

use crate::api::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    auth: Option<AuthUser>,
}

#[derive(Debug, Clone)]
pub struct AuthApi {
    api: ApiClient,
}

impl AuthApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `POST Auths/login`. Wrong credentials come back as a 401.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthUser, ApiError> {
        validate_login(username, password)?;

        let credentials = Credentials {
            username: username.trim().to_string(),
            password: password.trim().to_string(),
        };
        let response: LoginResponse = self.api.post("Auths/login", &credentials).await?;

        let user = response.auth.ok_or_else(|| ApiError::MalformedResponse {
            message: "Invalid response from server".to_string(),
            body: String::new(),
        })?;
        info!(user = %user.username, role = %user.role, "Logged in");
        Ok(user)
    }
}
