use crate::types::{CampsiteRecord, FilterCriteria, non_blank};

/// Returns the records whose name, description or location contains `query`.
///
/// Matching is a case-insensitive substring test. An absent or blank query
/// returns every record, not an empty list.
pub fn search_records(records: &[CampsiteRecord], query: Option<&str>) -> Vec<CampsiteRecord> {
    let Some(query) = non_blank(query) else {
        return records.to_vec();
    };

    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|campsite| text_matches(campsite, &query_lower))
        .cloned()
        .collect()
}

/// Applies the structural predicates of `criteria`, then narrows the result
/// further by its search query.
pub fn apply_filter(records: &[CampsiteRecord], criteria: &FilterCriteria) -> Vec<CampsiteRecord> {
    let matching: Vec<CampsiteRecord> = records
        .iter()
        .filter(|campsite| criteria.matches(campsite))
        .cloned()
        .collect();

    match criteria.search_term() {
        Some(query) => search_records(&matching, Some(query)),
        None => matching,
    }
}

fn text_matches(campsite: &CampsiteRecord, query_lower: &str) -> bool {
    [&campsite.name, &campsite.description, &campsite.location]
        .iter()
        .any(|field| field.to_lowercase().contains(query_lower))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_campsites;
    use crate::types::AmenityFilter;

    fn ids(records: &[CampsiteRecord]) -> Vec<u32> {
        records.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_search_matches_any_text_field() {
        let campsites = sample_campsites();

        // name
        assert_eq!(ids(&search_records(&campsites, Some("OASIS"))), vec![3]);
        // description
        assert_eq!(ids(&search_records(&campsites, Some("kayaking"))), vec![5]);
        // location
        assert_eq!(ids(&search_records(&campsites, Some("summit"))), vec![4]);

        assert!(search_records(&campsites, Some("glacier")).is_empty());
    }

    #[test]
    fn test_blank_search_returns_everything() {
        let campsites = sample_campsites();

        assert_eq!(search_records(&campsites, None).len(), campsites.len());
        assert_eq!(search_records(&campsites, Some("")).len(), campsites.len());
        assert_eq!(search_records(&campsites, Some("   ")).len(), campsites.len());
    }

    #[test]
    fn test_search_query_is_trimmed() {
        let campsites = sample_campsites();
        assert_eq!(ids(&search_records(&campsites, Some("  lake "))), vec![2]);
    }

    #[test]
    fn test_apply_filter_searches_after_structural_match() {
        let campsites = sample_campsites();

        // "mountain" appears in Pine Valley's location and Mountain Heights' name,
        // but only Pine Valley has electricity.
        let criteria = FilterCriteria {
            amenities: AmenityFilter {
                has_electricity: Some(true),
                ..Default::default()
            },
            search_query: Some("mountain".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(&campsites, &criteria)), vec![1]);
    }

    #[test]
    fn test_apply_filter_combines_state_and_price() {
        let campsites = sample_campsites();

        let criteria = FilterCriteria {
            state: Some("california".to_string()),
            min_price: Some(20.0),
            max_price: Some(25.0),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(&campsites, &criteria)), vec![1]);

        let budget = FilterCriteria {
            min_price: Some(15.0),
            max_price: Some(20.0),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(&campsites, &budget)), vec![2, 3, 4]);
    }

    #[test]
    fn test_empty_criteria_keeps_catalog_order() {
        let campsites = sample_campsites();
        let result = apply_filter(&campsites, &FilterCriteria::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }
}
