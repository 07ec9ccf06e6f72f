//! Pure filtering over a catalog snapshot.
//!
//! The three predicates are conjunctive and each passes everything when its
//! criterion is at rest (category "All", empty query, frequency toggle off),
//! so the default criteria are the identity filter. Input order is
//! preserved; one linear pass per recomputation.

use crate::model::{FilterCriteria, PointOfInterest};

/// Apply `criteria` to a catalog snapshot, returning the passing records in
/// their original order.
pub fn filter_catalog(
    catalog: &[PointOfInterest],
    criteria: &FilterCriteria,
) -> Vec<PointOfInterest> {
    let query = criteria.query.to_lowercase();

    catalog
        .iter()
        .filter(|poi| criteria.category.admits(poi.category))
        .filter(|poi| !criteria.frequent_only || poi.is_frequently_used)
        .filter(|poi| matches_query(poi, &query))
        .cloned()
        .collect()
}

/// Case-insensitive substring match over name, description, and building
/// code. A record without a building code never matches on that field.
fn matches_query(poi: &PointOfInterest, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    poi.name.to_lowercase().contains(query)
        || poi.description.to_lowercase().contains(query)
        || poi
            .building_code
            .as_deref()
            .is_some_and(|code| code.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategorySelector};

    fn poi(id: &str, name: &str, category: Category, description: &str) -> PointOfInterest {
        PointOfInterest {
            id: id.to_string(),
            name: name.to_string(),
            category,
            description: description.to_string(),
            latitude: 12.8230,
            longitude: 80.0408,
            building_code: None,
            floor_number: None,
            is_frequently_used: false,
        }
    }

    fn sample_catalog() -> Vec<PointOfInterest> {
        let mut library = poi("1", "Central Library", Category::Academic, "Main library");
        library.building_code = Some("LIB-01".to_string());
        library.is_frequently_used = true;

        let hostel = poi("2", "Hostel Block A", Category::Hostel, "Boys hostel");
        let annex = poi("3", "Library Annex", Category::Academic, "Reading halls");

        vec![library, hostel, annex]
    }

    #[test]
    fn default_criteria_are_the_identity() {
        let catalog = sample_catalog();
        let filtered = filter_catalog(&catalog, &FilterCriteria::default());
        assert_eq!(filtered, catalog);
    }

    #[test]
    fn category_filter_preserves_order() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            category: CategorySelector::Only(Category::Academic),
            ..Default::default()
        };
        let ids: Vec<_> = filter_catalog(&catalog, &criteria)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn frequent_only_keeps_flagged_records() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            frequent_only: true,
            ..Default::default()
        };
        let ids: Vec<_> = filter_catalog(&catalog, &criteria)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn query_is_case_insensitive_across_fields() {
        let catalog = sample_catalog();

        for query in ["lib", "LIB"] {
            let criteria = FilterCriteria {
                query: query.to_string(),
                ..Default::default()
            };
            let ids: Vec<_> = filter_catalog(&catalog, &criteria)
                .into_iter()
                .map(|p| p.id)
                .collect();
            // "Central Library" on name, "Library Annex" on name; the
            // building code LIB-01 also matches record 1.
            assert_eq!(ids, ["1", "3"], "query {query:?}");
        }
    }

    #[test]
    fn query_matches_description_only_records() {
        let mut catalog = sample_catalog();
        catalog.push(poi(
            "4",
            "Old Reading Room",
            Category::Academic,
            "Annex of the Central Library",
        ));
        let criteria = FilterCriteria {
            query: "central library".to_string(),
            ..Default::default()
        };
        let ids: Vec<_> = filter_catalog(&catalog, &criteria)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["1", "4"]);
    }

    #[test]
    fn missing_building_code_never_matches() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            query: "lib-01".to_string(),
            ..Default::default()
        };
        let ids: Vec<_> = filter_catalog(&catalog, &criteria)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn predicates_commute() {
        let catalog = sample_catalog();
        let category_only = FilterCriteria {
            category: CategorySelector::Only(Category::Academic),
            ..Default::default()
        };
        let query_only = FilterCriteria {
            query: "annex".to_string(),
            ..Default::default()
        };
        let both = FilterCriteria {
            category: CategorySelector::Only(Category::Academic),
            query: "annex".to_string(),
            ..Default::default()
        };

        let category_then_query = filter_catalog(&filter_catalog(&catalog, &category_only), &query_only);
        let query_then_category = filter_catalog(&filter_catalog(&catalog, &query_only), &category_only);
        let combined = filter_catalog(&catalog, &both);

        assert_eq!(category_then_query, query_then_category);
        assert_eq!(category_then_query, combined);
    }

    #[test]
    fn result_is_a_subsequence_of_the_input() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            query: "o".to_string(),
            ..Default::default()
        };
        let filtered = filter_catalog(&catalog, &criteria);

        let mut cursor = catalog.iter();
        for item in &filtered {
            assert!(cursor.any(|original| original == item));
        }
    }
}
