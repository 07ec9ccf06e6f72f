//! Campus map proximity and filtering engine.
//!
//! This crate merges two independently loaded collections (the shared campus
//! catalog and the signed-in user's custom markers), maintains live filter
//! state over category, text, and frequency predicates, annotates filtered
//! items with a haversine distance from a one-shot position reading, and
//! drives camera transitions on the map surface. Consumers (the CLI, a UI
//! shell) should depend on the types exported here instead of reimplementing
//! behavior.
//!
//! Recorded decision: a selection that the active filters hide is kept stale
//! rather than cleared; it simply stops resolving against the visible list
//! and must never panic a renderer.

#![deny(warnings)]

pub mod annotate;
pub mod backend;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod geo;
pub mod location;
pub mod marker;
pub mod model;
pub mod session;
pub mod viewport;

pub use annotate::{annotate, AnnotatedPoi};
pub use backend::{CatalogBackend, JsonBackend, NewMarker, RestBackend};
pub use catalog::CatalogStore;
pub use error::{Error, Result};
pub use filter::filter_catalog;
pub use geo::{format_distance, LatLng};
pub use location::{FixedLocationProvider, LocationProvider, UnsupportedLocationProvider};
pub use marker::{FlowState, MarkerCreationFlow, MarkerForm, MARKER_ICON};
pub use model::{
    Category, CategorySelector, CustomMarker, FilterCriteria, PointOfInterest, Selection,
};
pub use session::{LoadTicket, MapSession};
pub use viewport::{
    CameraCommand, ViewportController, ViewportState, FOCUS_ZOOM, OVERVIEW_CENTER, OVERVIEW_ZOOM,
};
