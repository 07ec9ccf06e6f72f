//! Map view state and its synchronization.
//!
//! `MapSession` owns all mutable map state: the loaded snapshots, the filter
//! criteria, the one-shot position reading, the selection, and the camera.
//! Recomputation of the visible list is an explicit call, invoked here on
//! every change to catalog, criteria, or position; there is no hidden
//! reactivity. All state is single-owner and mutated from one logical
//! thread; wrap the session in a mutex or an actor before sharing it.
//!
//! Loads are tied to the view lifetime through a [`LoadTicket`]: a result
//! that completes after the view was reset is discarded, never applied.

use tracing::debug;

use crate::annotate::{annotate, AnnotatedPoi};
use crate::backend::CatalogBackend;
use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::filter::filter_catalog;
use crate::geo::LatLng;
use crate::location::LocationProvider;
use crate::marker::MarkerCreationFlow;
use crate::model::{CustomMarker, FilterCriteria, OwnerId, PointOfInterest, Selection};
use crate::viewport::{CameraCommand, ViewportController, ViewportState};

/// Generation token carried by an in-flight load. Stale tickets identify
/// results that arrived after the issuing view went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Owner of all live map state.
#[derive(Debug, Default)]
pub struct MapSession {
    owner: Option<OwnerId>,
    store: CatalogStore,
    criteria: FilterCriteria,
    user_position: Option<LatLng>,
    selection: Option<Selection>,
    viewport: ViewportController,
    marker_flow: MarkerCreationFlow,
    visible: Vec<AnnotatedPoi>,
    epoch: u64,
}

impl MapSession {
    pub fn new(owner: Option<OwnerId>) -> Self {
        Self {
            owner,
            ..Default::default()
        }
    }

    /// The filtered, distance-annotated list driving the UI.
    pub fn visible(&self) -> &[AnnotatedPoi] {
        &self.visible
    }

    /// The signed-in user's custom markers, rendered next to the catalog.
    pub fn markers(&self) -> &[CustomMarker] {
        self.store.markers()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn user_position(&self) -> Option<LatLng> {
        self.user_position
    }

    /// Current selection. May reference an item that the active filters have
    /// since hidden; renderers must tolerate an id absent from `visible`.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn viewport(&self) -> &ViewportState {
        self.viewport.state()
    }

    pub fn marker_flow(&self) -> &MarkerCreationFlow {
        &self.marker_flow
    }

    pub fn marker_flow_mut(&mut self) -> &mut MarkerCreationFlow {
        &mut self.marker_flow
    }

    /// Ticket for a load issued against the current view generation.
    pub fn ticket(&self) -> LoadTicket {
        LoadTicket(self.epoch)
    }

    /// Apply a completed catalog read, unless the view has moved on.
    pub fn apply_catalog(&mut self, ticket: LoadTicket, result: Result<Vec<PointOfInterest>>) {
        if ticket.0 != self.epoch {
            debug!("discarding catalog result from a previous view generation");
            return;
        }
        self.store.apply_catalog(result);
        self.recompute();
    }

    /// Apply a completed marker read, unless the view has moved on.
    pub fn apply_markers(&mut self, ticket: LoadTicket, result: Result<Vec<CustomMarker>>) {
        if ticket.0 != self.epoch {
            debug!("discarding marker result from a previous view generation");
            return;
        }
        self.store.apply_markers(result);
    }

    /// Fetch the shared catalog and apply it. Independent of the marker
    /// load; the two may run in either order.
    pub async fn refresh_catalog(&mut self, backend: &dyn CatalogBackend) {
        let ticket = self.ticket();
        let result = backend.read_catalog().await;
        self.apply_catalog(ticket, result);
    }

    /// Fetch the owner's markers and apply them. With no owner the marker
    /// slice is cleared instead.
    pub async fn refresh_markers(&mut self, backend: &dyn CatalogBackend) {
        let Some(owner) = self.owner.clone() else {
            self.store.clear_markers();
            return;
        };
        let ticket = self.ticket();
        let result = backend.read_markers(&owner).await;
        self.apply_markers(ticket, result);
    }

    /// Replace the filter criteria and recompute the visible list.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    /// Recompute the visible list from the current snapshot, criteria, and
    /// position. Idempotent; safe to invoke redundantly.
    pub fn recompute(&mut self) {
        let filtered = filter_catalog(self.store.locations(), &self.criteria);
        self.visible = annotate(filtered, self.user_position);
        // A selection hidden by the new filters is kept stale on purpose;
        // see the crate docs for the recorded decision.
    }

    /// One-shot location lookup. Success stores the reading and re-annotates;
    /// failure leaves the position untouched and propagates for the UI to
    /// surface.
    pub async fn locate(&mut self, provider: &dyn LocationProvider) -> Result<LatLng> {
        let position = provider.current_position().await?;
        self.user_position = Some(position);
        self.recompute();
        Ok(position)
    }

    /// Focus a visible catalog item or an owned marker. Returns the camera
    /// command when the id resolves, `None` when it does not.
    pub fn select(&mut self, selection: Selection) -> Option<CameraCommand> {
        let target = match &selection {
            Selection::Poi(id) => self
                .visible
                .iter()
                .find(|entry| entry.poi.id == *id)
                .map(|entry| entry.poi.position()),
            Selection::Marker(id) => self
                .store
                .markers()
                .iter()
                .find(|marker| marker.id == *id)
                .map(|marker| marker.position()),
        }?;

        self.selection = Some(selection.clone());
        Some(self.viewport.select(selection, target))
    }

    /// View reload: new load generation, criteria and selection reset,
    /// position dropped, camera back to the overview. Results of loads
    /// issued before the reset will be discarded on arrival.
    pub fn reset(&mut self) -> CameraCommand {
        self.epoch += 1;
        self.criteria = FilterCriteria::default();
        self.selection = None;
        self.user_position = None;
        self.recompute();
        self.viewport.reset()
    }

    /// Submit the marker form and, on success, re-load the owner's markers.
    pub async fn create_marker(&mut self, backend: &dyn CatalogBackend) -> Result<()> {
        let owner = self.owner.clone();
        self.marker_flow.submit(backend, owner.as_deref()).await?;
        self.refresh_markers(backend).await;
        Ok(())
    }
}
