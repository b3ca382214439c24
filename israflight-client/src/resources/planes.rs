use israflight_core::models::Plane;
use israflight_core::validation::{require_id, validate_plane};
use tracing::info;

use crate::api::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct PlanesApi {
    api: ApiClient,
}

impl PlanesApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Plane>, ApiError> {
        self.api.get("planes").await
    }

    pub async fn get(&self, plane_id: i32) -> Result<Plane, ApiError> {
        require_id("plane", plane_id)?;
        self.api.get(&format!("planes/{}", plane_id)).await
    }

    pub async fn create(&self, plane: &Plane) -> Result<Plane, ApiError> {
        validate_plane(plane)?;
        let created: Plane = self.api.post("planes", plane).await?;
        info!("Plane added: {} {}", created.manufacturer, created.nickname);
        Ok(created)
    }

    /// Returns the stored plane when the backend echoes it back.
    pub async fn update(&self, plane_id: i32, plane: &Plane) -> Result<Option<Plane>, ApiError> {
        require_id("plane", plane_id)?;
        validate_plane(plane)?;
        self.api.put(&format!("planes/{}", plane_id), plane).await
    }

    pub async fn delete(&self, plane_id: i32) -> Result<bool, ApiError> {
        require_id("plane", plane_id)?;
        self.api.delete(&format!("planes/{}", plane_id)).await
    }
}
