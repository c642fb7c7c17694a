use campsite_catalog::CampsiteRecord;
use serde::Serialize;

use crate::preferences::PreferenceProfile;

/// Points for a campsite in the preferred state
pub const STATE_MATCH_POINTS: f64 = 3.0;
/// Points for a nightly price within budget
pub const WITHIN_BUDGET_POINTS: f64 = 2.0;
/// Extra points when the price is well under budget
pub const GREAT_VALUE_POINTS: f64 = 1.0;
/// Price-to-budget ratio below which a campsite counts as great value
pub const GREAT_VALUE_RATIO: f64 = 0.7;
/// Points per required amenity when all of them are offered
pub const FULL_AMENITY_POINTS: f64 = 1.5;
/// Points per offered amenity when only some are offered
pub const PARTIAL_AMENITY_POINTS: f64 = 0.5;
/// Points per activity keyword found in the description
pub const ACTIVITY_POINTS: f64 = 0.5;

/// Running score for one campsite and the reasons behind it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreCard {
    /// Accumulated score
    pub score: f64,
    /// Reasons in the order the rules fired
    pub reasons: Vec<String>,
}

impl ScoreCard {
    fn add(&mut self, points: f64, reason: impl Into<String>) {
        self.score += points;
        self.reasons.push(reason.into());
    }
}

/// A campsite with its recommendation score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecommendation {
    /// The recommended campsite
    pub campsite: CampsiteRecord,
    /// Relevance score, always positive
    pub score: f64,
    /// Human-readable reasons for the score
    pub matching_criteria: Vec<String>,
}

/// Scores a single campsite against `preferences`.
///
/// Rules are applied in a fixed order: state, budget, amenities, activities.
pub fn score_campsite(campsite: &CampsiteRecord, preferences: &PreferenceProfile) -> ScoreCard {
    let mut card = ScoreCard::default();

    if let Some(state) = preferences.preferred_state() {
        if campsite.is_in_state(state) {
            card.add(STATE_MATCH_POINTS, "Preferred state match");
        }
    }

    if let Some(budget) = preferences.max_budget() {
        if campsite.is_within_budget(budget) {
            card.add(WITHIN_BUDGET_POINTS, "Within budget");
            // a zero budget has no meaningful ratio
            if budget > 0.0 && campsite.price_per_night / budget < GREAT_VALUE_RATIO {
                card.add(GREAT_VALUE_POINTS, "Great value");
            }
        }
    }

    let required = preferences.required_amenities();
    if !required.is_empty() {
        if campsite.has_all_amenities(required) {
            card.add(
                FULL_AMENITY_POINTS * required.len() as f64,
                format!("All {} required amenities", required.len()),
            );
        } else {
            let matched = campsite.matched_amenities(required);
            if matched > 0 {
                card.add(
                    PARTIAL_AMENITY_POINTS * matched as f64,
                    format!("{} of {} amenities", matched, required.len()),
                );
            }
        }
    }

    let description = campsite.description.to_lowercase();
    for activity in preferences.preferred_activities() {
        if description.contains(&activity.to_lowercase()) {
            card.add(ACTIVITY_POINTS, format!("Offers {}", activity));
        }
    }

    card
}

/// Scores every campsite and returns those with a positive score, best first.
///
/// Campsites with equal scores keep their catalog order.
pub fn recommend(
    campsites: &[CampsiteRecord],
    preferences: &PreferenceProfile,
) -> Vec<ScoredRecommendation> {
    let mut recommendations: Vec<ScoredRecommendation> = campsites
        .iter()
        .filter_map(|campsite| {
            let card = score_campsite(campsite, preferences);
            (card.score > 0.0).then(|| ScoredRecommendation {
                campsite: campsite.clone(),
                score: card.score,
                matching_criteria: card.reasons,
            })
        })
        .collect();

    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));

    log::debug!(
        "Scored {} campsites, {} recommended",
        campsites.len(),
        recommendations.len()
    );

    recommendations
}
