use campsite_catalog::{Amenity, CatalogError};
use serde::Serialize;

/// What a visitor is looking for in a campsite
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreferenceProfile {
    preferred_state: Option<String>,
    max_budget: Option<f64>,
    required_amenities: Vec<Amenity>,
    preferred_activities: Vec<String>,
}

impl PreferenceProfile {
    /// Builds a profile from unvalidated input.
    ///
    /// Amenity tokens are matched case-insensitively against the fixed
    /// vocabulary and deduplicated; an unknown token is rejected. A blank
    /// state and blank activity keywords are dropped.
    pub fn from_raw<S: AsRef<str>>(
        preferred_state: Option<String>,
        max_budget: Option<f64>,
        required_amenities: &[S],
        preferred_activities: Vec<String>,
    ) -> Result<Self, CatalogError> {
        if let Some(budget) = max_budget {
            if !budget.is_finite() || budget < 0.0 {
                return Err(CatalogError::InvalidInput(
                    "max_budget must be a non-negative number".to_string(),
                ));
            }
        }

        let mut amenities: Vec<Amenity> = Vec::with_capacity(required_amenities.len());
        for token in required_amenities {
            let amenity: Amenity = token.as_ref().parse()?;
            if !amenities.contains(&amenity) {
                amenities.push(amenity);
            }
        }

        let mut activities: Vec<String> = Vec::with_capacity(preferred_activities.len());
        for activity in preferred_activities {
            let keyword = activity.trim();
            if keyword.is_empty()
                || activities
                    .iter()
                    .any(|a| a.to_lowercase() == keyword.to_lowercase())
            {
                continue;
            }
            activities.push(keyword.to_string());
        }

        Ok(Self {
            preferred_state: preferred_state
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            max_budget,
            required_amenities: amenities,
            preferred_activities: activities,
        })
    }

    /// Preferred state, if any
    pub fn preferred_state(&self) -> Option<&str> {
        self.preferred_state.as_deref()
    }

    /// Maximum nightly budget, if any
    pub fn max_budget(&self) -> Option<f64> {
        self.max_budget
    }

    /// Amenities the campsite should offer, without duplicates
    pub fn required_amenities(&self) -> &[Amenity] {
        &self.required_amenities
    }

    /// Activity keywords looked up in campsite descriptions
    pub fn preferred_activities(&self) -> &[String] {
        &self.preferred_activities
    }

    /// Whether the profile states no preference at all
    pub fn is_empty(&self) -> bool {
        self.preferred_state.is_none()
            && self.max_budget.is_none()
            && self.required_amenities.is_empty()
            && self.preferred_activities.is_empty()
    }
}
