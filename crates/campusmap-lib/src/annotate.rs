//! Distance annotation for filtered catalog entries.
//!
//! Annotation is purely additive: it never excludes or reorders items, and a
//! very large distance still keeps its record in the list. Distances are
//! derived values and are never persisted.

use crate::geo::{format_distance, LatLng};
use crate::model::PointOfInterest;

/// A filtered catalog entry with its derived distance from the user,
/// when a position reading is known.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedPoi {
    pub poi: PointOfInterest,
    pub distance_meters: Option<f64>,
}

impl AnnotatedPoi {
    /// Display string for the distance badge, absent without a position.
    pub fn distance_label(&self) -> Option<String> {
        self.distance_meters.map(format_distance)
    }
}

/// Attach a distance from `position` to every entry, in place of order.
///
/// Must be re-run whenever the user position changes, even if the filtered
/// list itself is unchanged.
pub fn annotate(filtered: Vec<PointOfInterest>, position: Option<LatLng>) -> Vec<AnnotatedPoi> {
    filtered
        .into_iter()
        .map(|poi| {
            let distance_meters = position.map(|p| p.distance_to(&poi.position()));
            AnnotatedPoi {
                poi,
                distance_meters,
            }
        })
        .collect()
}
