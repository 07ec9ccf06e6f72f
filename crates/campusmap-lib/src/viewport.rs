//! Camera state machine for the map surface.
//!
//! The viewport is either idle on the campus overview or focused on one
//! selected item at a fixed close zoom. Selecting always emits an animated
//! fly, never an instant jump. There is no deselect control: the only way
//! back to the overview is reloading the view.

use crate::geo::LatLng;
use crate::model::Selection;

/// Campus overview center.
pub const OVERVIEW_CENTER: LatLng = LatLng {
    lat: 12.8230,
    lon: 80.0408,
};

/// Wide zoom used for the overview.
pub const OVERVIEW_ZOOM: u8 = 16;

/// Close zoom used when an item is focused.
pub const FOCUS_ZOOM: u8 = 18;

/// Current camera focus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewportState {
    #[default]
    Idle,
    Focused(Selection),
}

/// Command issued to the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Animated transition to the target center and zoom.
    FlyTo { center: LatLng, zoom: u8 },
}

/// Drives camera transitions from selection changes.
#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    state: ViewportState,
}

impl ViewportController {
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Focus the given item: Idle -> Focused, or refocus from another item.
    pub fn select(&mut self, selection: Selection, target: LatLng) -> CameraCommand {
        self.state = ViewportState::Focused(selection);
        CameraCommand::FlyTo {
            center: target,
            zoom: FOCUS_ZOOM,
        }
    }

    /// View reload: back to the overview at the wide zoom.
    pub fn reset(&mut self) -> CameraCommand {
        self.state = ViewportState::Idle;
        CameraCommand::FlyTo {
            center: OVERVIEW_CENTER,
            zoom: OVERVIEW_ZOOM,
        }
    }
}
