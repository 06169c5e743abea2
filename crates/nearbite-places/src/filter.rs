//! Relevance filtering and photo selection for nearby-search records.

use std::collections::HashSet;

use crate::types::{FilteredResult, PhotoRef, PlaceRecord};

/// A record must carry at least one of these types to be kept.
pub const INCLUDED_TYPES: [&str; 3] = ["restaurant", "cafe", "food"];

/// A record carrying any of these types is dropped.
pub const EXCLUDED_TYPES: [&str; 6] = [
    "lodging",
    "golf_course",
    "tourist_attraction",
    "park",
    "hotel",
    "resort",
];

/// Attribution keywords that mark a photo as likely showing food.
const FOOD_PHOTO_KEYWORDS: [&str; 3] = ["food", "dish", "meal"];

/// Keeps eateries, drops duplicates by name, and picks one photo per place.
///
/// Records are considered in order; the first record with a given name wins
/// and later ones with the same name are dropped whatever their other fields.
/// Name comparison is exact and case-sensitive. Records with a blank name
/// are dropped.
#[must_use]
pub fn filter_records(records: Vec<PlaceRecord>) -> Vec<FilteredResult> {
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut accepted = Vec::new();

    for record in records {
        if record.name.trim().is_empty()
            || !is_eatery(&record)
            || seen_names.contains(&record.name)
        {
            continue;
        }
        seen_names.insert(record.name.clone());

        let photo_reference = select_photo(&record.photos).map(|p| p.reference.clone());
        accepted.push(FilteredResult {
            name: record.name,
            types: record.types,
            rating: record.rating,
            address: record.address,
            photo_reference,
        });
    }

    accepted
}

/// Category check: at least one included type and no excluded type.
#[must_use]
pub fn is_eatery(record: &PlaceRecord) -> bool {
    INCLUDED_TYPES.iter().any(|t| record.types.contains(*t))
        && !EXCLUDED_TYPES.iter().any(|t| record.types.contains(*t))
}

/// Picks the first photo whose attribution mentions food, else the first photo.
///
/// Best effort: attributions name the contributor far more often than the
/// subject, so the fallback is the common case.
#[must_use]
pub fn select_photo(photos: &[PhotoRef]) -> Option<&PhotoRef> {
    photos
        .iter()
        .find(|photo| photo.attributions.iter().any(|a| mentions_food(a)))
        .or_else(|| photos.first())
}

fn mentions_food(attribution: &str) -> bool {
    let lowered = attribution.to_lowercase();
    FOOD_PHOTO_KEYWORDS.iter().any(|k| lowered.contains(k))
}
