//! Generic JSON-over-HTTP wrapper for the IsraFlight backend.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::app_config::ApiConfig;
use crate::error::ApiError;

/// Cheap to clone, clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    read_timeout: Duration,
    write_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ApiError::Transport {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            read_timeout: config.read_timeout(),
            write_timeout: config.write_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `flights`, `/flights` and `flights/` under base `http://h/api` all
    /// land on `http://h/api/flights...`; only one leading slash is dropped.
    pub fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = self.http.get(&url).timeout(self.read_timeout);
        let (_, body) = self.send("GET", &url, request).await?;
        decode(&body)
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let request = self.http.get(&url).query(query).timeout(self.read_timeout);
        let (_, body) = self.send("GET", &url, request).await?;
        decode(&body)
    }

    pub async fn post<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let request = self.http.post(&url).json(payload).timeout(self.write_timeout);
        let (_, body) = self.send("POST", &url, request).await?;
        decode(&body)
    }

    /// `None` when the backend answers 204 or with an empty body.
    pub async fn put<B, T>(&self, path: &str, payload: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let request = self.http.put(&url).json(payload).timeout(self.read_timeout);
        let (status, body) = self.send("PUT", &url, request).await?;

        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(None);
        }
        decode(&body).map(Some)
    }

    /// True only for 204, mirroring how the backend reports a deletion.
    pub async fn delete(&self, path: &str) -> Result<bool, ApiError> {
        let url = self.url(path);
        let request = self.http.delete(&url).timeout(self.read_timeout);
        let (status, _) = self.send("DELETE", &url, request).await?;
        Ok(status == StatusCode::NO_CONTENT)
    }

    async fn send(
        &self,
        method: &str,
        url: &str,
        request: RequestBuilder,
    ) -> Result<(StatusCode, String), ApiError> {
        debug!(%method, %url, "Sending request");

        let response = request.send().await.map_err(|e| {
            warn!(%method, %url, "Request failed: {}", e);
            ApiError::from(e)
        })?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "Backend refused request");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(%method, %url, status = status.as_u16(), bytes = body.len(), "Request succeeded");
        Ok((status, body))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse {
        message: e.to_string(),
        body: body.to_string(),
    })
}
