//! Integration tests for recommendation scoring.
//!
//! These check exact scores and ordering against the sample catalog.

use campsite_catalog::sample_campsites;
use recommendation_engine::{PreferenceProfile, recommend};

fn california_profile(activities: Vec<String>) -> PreferenceProfile {
    PreferenceProfile::from_raw(
        Some("California".to_string()),
        Some(30.0),
        &["water", "electricity"],
        activities,
    )
    .unwrap()
}

#[test]
fn test_pine_valley_scores_eight() {
    let ranked = recommend(&sample_campsites(), &california_profile(vec![]));

    let top = &ranked[0];
    assert_eq!(top.campsite.id, 1);
    assert_eq!(top.score, 8.0);
    assert_eq!(
        top.matching_criteria,
        vec![
            "Preferred state match",
            "Within budget",
            "All 2 required amenities"
        ]
    );
}

#[test]
fn test_full_ranking_order() {
    let ranked = recommend(&sample_campsites(), &california_profile(vec![]));

    let scores: Vec<(u32, f64)> = ranked.iter().map(|r| (r.campsite.id, r.score)).collect();
    assert_eq!(
        scores,
        vec![(1, 8.0), (3, 6.0), (5, 5.0), (2, 3.5), (4, 3.0)]
    );

    let lakeside = ranked.iter().find(|r| r.campsite.id == 2).unwrap();
    assert_eq!(
        lakeside.matching_criteria,
        vec!["Within budget", "Great value", "1 of 2 amenities"]
    );
}

#[test]
fn test_activities_layer_onto_other_rules() {
    let ranked = recommend(
        &sample_campsites(),
        &california_profile(vec!["hiking".to_string(), "fishing".to_string()]),
    );

    let pine_valley = ranked.iter().find(|r| r.campsite.id == 1).unwrap();
    assert_eq!(pine_valley.score, 8.5);
    assert_eq!(pine_valley.matching_criteria.last().unwrap(), "Offers hiking");

    let lakeside = ranked.iter().find(|r| r.campsite.id == 2).unwrap();
    assert_eq!(lakeside.score, 4.0);
}

#[test]
fn test_zero_scores_are_dropped() {
    let preferences = PreferenceProfile::from_raw::<&str>(
        Some("Texas".to_string()),
        Some(5.0),
        &[],
        vec!["surfing".to_string()],
    )
    .unwrap();

    assert!(recommend(&sample_campsites(), &preferences).is_empty());
}

#[test]
fn test_scores_are_positive_and_sorted() {
    let preferences = PreferenceProfile::from_raw(
        None,
        Some(20.0),
        &["restrooms"],
        vec!["mountain".to_string(), "river".to_string()],
    )
    .unwrap();

    let ranked = recommend(&sample_campsites(), &preferences);
    assert!(!ranked.is_empty());
    assert!(ranked.iter().all(|r| r.score > 0.0));
    assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
}
