//! Data model for the campus catalog and the live filter state.
//!
//! `PointOfInterest` records are created and mutated exclusively by the
//! external data store; this library only reads them. `CustomMarker` records
//! are user-owned and append-only from this library's perspective.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geo::LatLng;

/// Opaque identifier of a catalog location.
pub type PoiId = String;

/// Opaque identifier of a user-created marker.
pub type MarkerId = String;

/// Opaque identifier of the signed-in user.
pub type OwnerId = String;

/// Display color used for any category missing from the color table.
pub const DEFAULT_CATEGORY_COLOR: &str = "#718096";

/// Closed set of location categories. Every catalog record carries one;
/// there is no "uncategorized" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Academic,
    Administrative,
    Hostel,
    #[serde(rename = "Food & Dining")]
    FoodDining,
    Sports,
    Healthcare,
    Transportation,
    Banking,
    Shopping,
    Events,
    Fitness,
}

static CATEGORY_COLORS: Lazy<HashMap<Category, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (Category::Academic, "#f56565"),
        (Category::Administrative, "#ed8936"),
        (Category::Hostel, "#4299e1"),
        (Category::FoodDining, "#48bb78"),
        (Category::Sports, "#9f7aea"),
        (Category::Healthcare, "#38b2ac"),
    ])
});

impl Category {
    /// All categories in the order the UI presents them.
    pub const ALL: [Category; 11] = [
        Category::Academic,
        Category::Administrative,
        Category::Hostel,
        Category::FoodDining,
        Category::Sports,
        Category::Healthcare,
        Category::Transportation,
        Category::Banking,
        Category::Shopping,
        Category::Events,
        Category::Fitness,
    ];

    /// UI label, identical to the wire representation.
    pub fn label(self) -> &'static str {
        match self {
            Category::Academic => "Academic",
            Category::Administrative => "Administrative",
            Category::Hostel => "Hostel",
            Category::FoodDining => "Food & Dining",
            Category::Sports => "Sports",
            Category::Healthcare => "Healthcare",
            Category::Transportation => "Transportation",
            Category::Banking => "Banking",
            Category::Shopping => "Shopping",
            Category::Events => "Events",
            Category::Fitness => "Fitness",
        }
    }

    /// Display color for map pins; gray fallback for categories
    /// absent from the color table.
    pub fn color(self) -> &'static str {
        CATEGORY_COLORS
            .get(&self)
            .copied()
            .unwrap_or(DEFAULT_CATEGORY_COLOR)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| Error::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// Category dimension of the filter: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Only(Category),
}

impl CategorySelector {
    /// Whether a record with the given category passes this selector.
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::All => f.write_str("All"),
            CategorySelector::Only(category) => f.write_str(category.label()),
        }
    }
}

impl FromStr for CategorySelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(CategorySelector::All)
        } else {
            s.parse().map(CategorySelector::Only)
        }
    }
}

/// A canonical campus location, read-only to this library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: PoiId,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub building_code: Option<String>,
    #[serde(default)]
    pub floor_number: Option<String>,
    #[serde(default)]
    pub is_frequently_used: bool,
}

impl PointOfInterest {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// A user-created marker rendered alongside the catalog. Owned exclusively
/// by its creator and only ever read back for that owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMarker {
    pub id: MarkerId,
    #[serde(rename = "user_id")]
    pub owner_id: OwnerId,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub color: String,
    pub icon: String,
}

impl CustomMarker {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// Live filter state. A plain value recomputed on every UI interaction and
/// never persisted; reloading the view resets it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub category: CategorySelector,
    pub query: String,
    pub frequent_only: bool,
}

/// Reference to the focused item on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Poi(PoiId),
    Marker(MarkerId),
}
