use jama_core::{FilterState, Place};

/// Filter a catalog against the structured selection and a free-text query.
///
/// Order-preserving: the result is a sub-sequence of `catalog`; nothing is
/// ranked or reordered. Category and amenity selections and the query
/// compose with logical AND. Budget and distance selections are accepted
/// but do not constrain the result. Pure and deterministic.
pub fn match_places(catalog: &[Place], filters: &FilterState, query: &str) -> Vec<Place> {
    let needle = query.trim().to_lowercase();

    catalog
        .iter()
        .filter(|place| matches_filters(place, filters) && matches_query(place, &needle))
        .cloned()
        .collect()
}

fn matches_filters(place: &Place, filters: &FilterState) -> bool {
    if let Some(category) = filters.category {
        if place.category != category {
            return false;
        }
    }

    filters
        .amenities
        .iter()
        .all(|wanted| place.amenities.iter().any(|have| have == wanted))
}

fn matches_query(place: &Place, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    place.name.to_lowercase().contains(needle)
        || place.description.to_lowercase().contains(needle)
        || place
            .amenities
            .iter()
            .any(|amenity| amenity.to_lowercase().contains(needle))
}
