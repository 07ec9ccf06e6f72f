//! In-memory snapshot of the two map collections.
//!
//! The shared catalog and the user's custom markers are loaded by two
//! independent requests that may complete in any order; each load replaces
//! its own slice wholesale without touching the other, and re-invoking a
//! load is an idempotent replace, never an append.
//!
//! Read failures degrade silently: the failing slice becomes empty, a
//! warning is logged, and the map keeps working with partial data.

use tracing::{debug, warn};

use crate::backend::CatalogBackend;
use crate::error::Result;
use crate::model::{CustomMarker, PointOfInterest};

/// Holds the loaded catalog and marker snapshots.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    locations: Vec<PointOfInterest>,
    markers: Vec<CustomMarker>,
}

impl CatalogStore {
    /// The shared catalog slice, name-ordered as served by the store.
    pub fn locations(&self) -> &[PointOfInterest] {
        &self.locations
    }

    /// The signed-in user's custom markers.
    pub fn markers(&self) -> &[CustomMarker] {
        &self.markers
    }

    /// Apply a completed catalog read: wholesale replace on success,
    /// empty slice on failure.
    pub fn apply_catalog(&mut self, result: Result<Vec<PointOfInterest>>) {
        match result {
            Ok(locations) => {
                debug!(count = locations.len(), "catalog snapshot replaced");
                self.locations = locations;
            }
            Err(error) => {
                warn!(error = %error, "catalog load failed, showing an empty catalog");
                self.locations = Vec::new();
            }
        }
    }

    /// Apply a completed marker read, same policy as the catalog.
    pub fn apply_markers(&mut self, result: Result<Vec<CustomMarker>>) {
        match result {
            Ok(markers) => {
                debug!(count = markers.len(), "marker snapshot replaced");
                self.markers = markers;
            }
            Err(error) => {
                warn!(error = %error, "marker load failed, showing no custom markers");
                self.markers = Vec::new();
            }
        }
    }

    /// Drop all markers; used when no owner is known.
    pub fn clear_markers(&mut self) {
        self.markers = Vec::new();
    }

    /// Fetch and replace the shared catalog.
    pub async fn load_catalog(&mut self, backend: &dyn CatalogBackend) {
        let result = backend.read_catalog().await;
        self.apply_catalog(result);
    }

    /// Fetch and replace the markers owned by `owner`; with no owner the
    /// slice is simply cleared.
    pub async fn load_markers(&mut self, backend: &dyn CatalogBackend, owner: Option<&str>) {
        let Some(owner) = owner else {
            self.clear_markers();
            return;
        };
        let result = backend.read_markers(owner).await;
        self.apply_markers(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::Category;

    fn poi(name: &str) -> PointOfInterest {
        PointOfInterest {
            id: name.to_string(),
            name: name.to_string(),
            category: Category::Academic,
            description: String::new(),
            latitude: 12.8230,
            longitude: 80.0408,
            building_code: None,
            floor_number: None,
            is_frequently_used: false,
        }
    }

    #[test]
    fn failed_catalog_read_clears_only_the_catalog_slice() {
        let mut store = CatalogStore::default();
        store.apply_catalog(Ok(vec![poi("Library")]));
        store.apply_markers(Ok(vec![CustomMarker {
            id: "m1".to_string(),
            owner_id: "alice".to_string(),
            name: "My spot".to_string(),
            description: String::new(),
            latitude: 12.8230,
            longitude: 80.0408,
            color: "#3b82f6".to_string(),
            icon: "map-pin".to_string(),
        }]));

        store.apply_catalog(Err(Error::BackendRejected {
            status: 500,
            message: "boom".to_string(),
        }));

        assert!(store.locations().is_empty());
        assert_eq!(store.markers().len(), 1);
    }

    #[test]
    fn reapplying_a_load_replaces_instead_of_appending() {
        let mut store = CatalogStore::default();
        store.apply_catalog(Ok(vec![poi("A"), poi("B")]));
        store.apply_catalog(Ok(vec![poi("C")]));
        assert_eq!(store.locations().len(), 1);
        assert_eq!(store.locations()[0].name, "C");
    }

    #[tokio::test]
    async fn loads_complete_in_either_order() {
        let backend = crate::backend::JsonBackend::from_locations(vec![poi("Library")]);
        backend
            .create_marker(crate::backend::NewMarker {
                user_id: "alice".to_string(),
                name: "My spot".to_string(),
                description: String::new(),
                latitude: 12.8230,
                longitude: 80.0408,
                color: "#3b82f6".to_string(),
                icon: "map-pin".to_string(),
            })
            .await
            .unwrap();

        // Markers before catalog.
        let mut store = CatalogStore::default();
        store.load_markers(&backend, Some("alice")).await;
        store.load_catalog(&backend).await;
        assert_eq!(store.locations().len(), 1);
        assert_eq!(store.markers().len(), 1);

        // Catalog before markers.
        let mut store = CatalogStore::default();
        store.load_catalog(&backend).await;
        store.load_markers(&backend, Some("alice")).await;
        assert_eq!(store.locations().len(), 1);
        assert_eq!(store.markers().len(), 1);
    }

    #[tokio::test]
    async fn loading_markers_without_an_owner_clears_the_slice() {
        let backend = crate::backend::JsonBackend::from_locations(Vec::new());
        let mut store = CatalogStore::default();
        store.apply_markers(Ok(vec![CustomMarker {
            id: "m1".to_string(),
            owner_id: "alice".to_string(),
            name: "My spot".to_string(),
            description: String::new(),
            latitude: 12.8230,
            longitude: 80.0408,
            color: "#3b82f6".to_string(),
            icon: "map-pin".to_string(),
        }]));

        store.load_markers(&backend, None).await;
        assert!(store.markers().is_empty());
    }
}
