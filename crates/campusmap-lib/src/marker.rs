//! Custom marker creation flow.
//!
//! The flow is a small state machine rather than a pair of booleans, so a
//! closed-but-submitting modal is unrepresentable. Latitude and longitude
//! arrive as raw form text and must parse as numbers before submission;
//! range validity is left to the persistence boundary.

use tracing::warn;

use crate::backend::{CatalogBackend, NewMarker};
use crate::error::{Error, Result};

/// Icon tag sent with every marker.
pub const MARKER_ICON: &str = "map-pin";

/// Default marker color pre-filled in the form.
pub const DEFAULT_MARKER_COLOR: &str = "#3b82f6";

/// Raw form input for a new marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerForm {
    pub name: String,
    pub description: String,
    pub latitude: String,
    pub longitude: String,
    pub color: String,
}

impl Default for MarkerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            color: DEFAULT_MARKER_COLOR.to_string(),
        }
    }
}

/// Where the creation flow currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Closed,
    Editing,
    Submitting,
    /// Submission failed; the form is preserved for retry.
    Failed(String),
}

/// Validated field values ready for submission.
#[derive(Debug, Clone, PartialEq)]
struct ValidatedMarker {
    name: String,
    description: String,
    latitude: f64,
    longitude: f64,
    color: String,
}

/// Validates and submits new custom markers.
#[derive(Debug, Clone, Default)]
pub struct MarkerCreationFlow {
    state: FlowState,
    form: MarkerForm,
}

impl MarkerCreationFlow {
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn form(&self) -> &MarkerForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MarkerForm {
        &mut self.form
    }

    /// Open the flow with a fresh form.
    pub fn open(&mut self) {
        self.state = FlowState::Editing;
        self.form = MarkerForm::default();
    }

    /// Dismiss the flow without submitting.
    pub fn close(&mut self) {
        self.state = FlowState::Closed;
    }

    /// Submit the current form for `owner`.
    ///
    /// Validation failures and write failures both land in
    /// [`FlowState::Failed`] with the form intact; success closes the flow.
    /// The caller reloads the owner's markers after a successful submit.
    pub async fn submit(
        &mut self,
        backend: &dyn CatalogBackend,
        owner: Option<&str>,
    ) -> Result<()> {
        let Some(owner) = owner else {
            return Err(Error::MissingOwner);
        };

        let validated = match validate(&self.form) {
            Ok(validated) => validated,
            Err(error) => {
                self.state = FlowState::Failed(error.to_string());
                return Err(error);
            }
        };

        self.state = FlowState::Submitting;
        let marker = NewMarker {
            user_id: owner.to_string(),
            name: validated.name,
            description: validated.description,
            latitude: validated.latitude,
            longitude: validated.longitude,
            color: validated.color,
            icon: MARKER_ICON.to_string(),
        };

        match backend.create_marker(marker).await {
            Ok(()) => {
                self.state = FlowState::Closed;
                self.form = MarkerForm::default();
                Ok(())
            }
            Err(error) => {
                warn!(error = %error, "marker submission failed");
                self.state = FlowState::Failed(error.to_string());
                Err(error)
            }
        }
    }
}

/// Name must be non-empty; latitude and longitude must parse as numbers.
/// No client-side range check on the coordinates.
fn validate(form: &MarkerForm) -> Result<ValidatedMarker> {
    if form.name.is_empty() {
        return Err(Error::MissingField { field: "name" });
    }

    let latitude = parse_coordinate("latitude", &form.latitude)?;
    let longitude = parse_coordinate("longitude", &form.longitude)?;

    Ok(ValidatedMarker {
        name: form.name.clone(),
        description: form.description.clone(),
        latitude,
        longitude,
        color: form.color.clone(),
    })
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64> {
    if value.is_empty() {
        return Err(Error::MissingField { field });
    }
    value.parse().map_err(|_| Error::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
