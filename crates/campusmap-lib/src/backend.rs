//! Boundary to the external data store.
//!
//! The store is remote and owns every record; this library consumes three
//! operations: a name-ordered catalog read, an owner-scoped marker read, and
//! a marker insert. `RestBackend` speaks to a PostgREST-style API;
//! `JsonBackend` serves a local JSON snapshot for the CLI and tests.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{CustomMarker, OwnerId, PointOfInterest};

/// Payload for a marker insert. The id is assigned by the store.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NewMarker {
    pub user_id: OwnerId,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub color: String,
    pub icon: String,
}

/// Data-store operations consumed by the map view.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Full catalog, ordered by name ascending as defined by the store.
    async fn read_catalog(&self) -> Result<Vec<PointOfInterest>>;

    /// Markers owned by the given user, and nobody else's.
    async fn read_markers(&self, owner: &str) -> Result<Vec<CustomMarker>>;

    /// Insert a new marker for its owner.
    async fn create_marker(&self, marker: NewMarker) -> Result<()>;
}

/// HTTP client for a PostgREST-style campus data API.
#[derive(Debug, Clone)]
pub struct RestBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestBackend {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    /// Map non-success statuses to a backend rejection carrying the body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(Error::BackendRejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CatalogBackend for RestBackend {
    async fn read_catalog(&self) -> Result<Vec<PointOfInterest>> {
        let response = self
            .client
            .get(self.table_url("campus_locations"))
            .query(&[("select", "*"), ("order", "name.asc")])
            .header("apikey", &self.api_key)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        let locations: Vec<PointOfInterest> = response.json().await?;
        debug!(count = locations.len(), "fetched campus locations");
        Ok(locations)
    }

    async fn read_markers(&self, owner: &str) -> Result<Vec<CustomMarker>> {
        let owner_filter = format!("eq.{owner}");
        let response = self
            .client
            .get(self.table_url("custom_markers"))
            .query(&[("select", "*"), ("user_id", owner_filter.as_str())])
            .header("apikey", &self.api_key)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        let markers: Vec<CustomMarker> = response.json().await?;
        debug!(owner, count = markers.len(), "fetched custom markers");
        Ok(markers)
    }

    async fn create_marker(&self, marker: NewMarker) -> Result<()> {
        let response = self
            .client
            .post(self.table_url("custom_markers"))
            .header("apikey", &self.api_key)
            .json(&marker)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// In-process backend over a JSON catalog snapshot.
///
/// Created markers live in memory only; the CLI uses this to run without
/// network access and tests use it as a deterministic store.
#[derive(Debug)]
pub struct JsonBackend {
    locations: Vec<PointOfInterest>,
    markers: Mutex<Vec<CustomMarker>>,
    next_marker_id: AtomicU64,
}

impl JsonBackend {
    /// Load the catalog from a JSON array of locations.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let locations: Vec<PointOfInterest> = serde_json::from_str(&data)?;
        Ok(Self::from_locations(locations))
    }

    pub fn from_locations(mut locations: Vec<PointOfInterest>) -> Self {
        // The remote store serves the catalog name-ordered; mirror that here.
        locations.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            locations,
            markers: Mutex::new(Vec::new()),
            next_marker_id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl CatalogBackend for JsonBackend {
    async fn read_catalog(&self) -> Result<Vec<PointOfInterest>> {
        Ok(self.locations.clone())
    }

    async fn read_markers(&self, owner: &str) -> Result<Vec<CustomMarker>> {
        let markers = self.markers.lock().await;
        Ok(markers
            .iter()
            .filter(|m| m.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn create_marker(&self, marker: NewMarker) -> Result<()> {
        let id = self.next_marker_id.fetch_add(1, Ordering::Relaxed);
        let mut markers = self.markers.lock().await;
        markers.push(CustomMarker {
            id: format!("marker-{id}"),
            owner_id: marker.user_id,
            name: marker.name,
            description: marker.description,
            latitude: marker.latitude,
            longitude: marker.longitude,
            color: marker.color,
            icon: marker.icon,
        });
        Ok(())
    }
}
