use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single campsite listing in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampsiteRecord {
    /// Unique, positive identifier of the campsite
    pub id: u32,
    /// Display name of the campsite
    pub name: String,
    /// Free-text description, also used for activity matching
    pub description: String,
    /// City or area the campsite is located in
    pub location: String,
    /// State name, compared case-insensitively
    pub state: String,
    /// Whether drinking water is available
    pub has_water: bool,
    /// Whether electrical hookups are available
    pub has_electricity: bool,
    /// Whether restroom facilities are available
    pub has_restrooms: bool,
    /// Price per night in USD
    pub price_per_night: f64,
    /// URL of an image of the campsite
    pub image_url: String,
}

impl CampsiteRecord {
    /// Returns whether the campsite offers the given amenity
    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Water => self.has_water,
            Amenity::Electricity => self.has_electricity,
            Amenity::Restrooms => self.has_restrooms,
        }
    }

    /// Returns whether the campsite offers every one of `required`
    pub fn has_all_amenities(&self, required: &[Amenity]) -> bool {
        required.iter().all(|amenity| self.has_amenity(*amenity))
    }

    /// Counts how many of `required` the campsite offers
    pub fn matched_amenities(&self, required: &[Amenity]) -> usize {
        required
            .iter()
            .filter(|amenity| self.has_amenity(**amenity))
            .count()
    }

    /// Total cost of staying `nights` nights
    pub fn total_cost(&self, nights: u32) -> f64 {
        self.price_per_night * f64::from(nights)
    }

    /// Whether the nightly price fits within `max_budget`
    pub fn is_within_budget(&self, max_budget: f64) -> bool {
        self.price_per_night <= max_budget
    }

    /// Case-insensitive comparison of the campsite's state with `state`
    pub fn is_in_state(&self, state: &str) -> bool {
        self.state.to_lowercase() == state.to_lowercase()
    }
}

/// One of the fixed facility flags a campsite may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    /// Drinking water
    Water,
    /// Electrical hookups
    Electricity,
    /// Restroom facilities
    Restrooms,
}

impl Amenity {
    /// The complete amenity vocabulary
    pub const ALL: [Amenity; 3] = [Amenity::Water, Amenity::Electricity, Amenity::Restrooms];

    /// Lowercase token naming the amenity
    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::Water => "water",
            Amenity::Electricity => "electricity",
            Amenity::Restrooms => "restrooms",
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Amenity {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Amenity::ALL
            .into_iter()
            .find(|amenity| amenity.as_str() == token)
            .ok_or_else(|| {
                let valid: Vec<&str> = Amenity::ALL.iter().map(Amenity::as_str).collect();
                CatalogError::InvalidInput(format!(
                    "Invalid amenity: {}. Valid options: {}",
                    s,
                    valid.join(", ")
                ))
            })
    }
}

/// Optional amenity predicates; `None` matches any value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmenityFilter {
    /// Required value of `has_water`, if any
    pub has_water: Option<bool>,
    /// Required value of `has_electricity`, if any
    pub has_electricity: Option<bool>,
    /// Required value of `has_restrooms`, if any
    pub has_restrooms: Option<bool>,
}

impl AmenityFilter {
    /// Returns whether the campsite satisfies every provided flag
    pub fn matches(&self, campsite: &CampsiteRecord) -> bool {
        let flag_matches = |wanted: Option<bool>, actual: bool| wanted.is_none_or(|w| w == actual);

        flag_matches(self.has_water, campsite.has_water)
            && flag_matches(self.has_electricity, campsite.has_electricity)
            && flag_matches(self.has_restrooms, campsite.has_restrooms)
    }
}

/// Criteria used to narrow the catalog down for the listing endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// State the campsite must be in (case-insensitive)
    pub state: Option<String>,
    /// Amenity predicates
    pub amenities: AmenityFilter,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// Free-text query applied after the structural predicates
    pub search_query: Option<String>,
}

impl FilterCriteria {
    /// Checks the price bounds before the criteria are applied
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (name, bound) in [("min_price", self.min_price), ("max_price", self.max_price)] {
            if let Some(value) = bound {
                if !value.is_finite() || value < 0.0 {
                    return Err(CatalogError::InvalidInput(format!(
                        "{} must be a non-negative number",
                        name
                    )));
                }
            }
        }

        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(CatalogError::InvalidInput(
                    "min_price cannot be greater than max_price".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Structural match on state, amenities and price; search is not applied here
    pub fn matches(&self, campsite: &CampsiteRecord) -> bool {
        if let Some(state) = non_blank(self.state.as_deref()) {
            if !campsite.is_in_state(state) {
                return false;
            }
        }
        if !self.amenities.matches(campsite) {
            return false;
        }
        if let Some(min) = self.min_price {
            if campsite.price_per_night < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if campsite.price_per_night > max {
                return false;
            }
        }
        true
    }

    /// Trimmed search query, or `None` when absent or blank
    pub fn search_term(&self) -> Option<&str> {
        non_blank(self.search_query.as_deref())
    }
}

/// Returns the trimmed string unless it is absent or blank
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Lowest and highest nightly price in the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceRange {
    /// Lowest nightly price
    pub min_price: f64,
    /// Highest nightly price
    pub max_price: f64,
}

impl PriceRange {
    /// Computes the range over `campsites`; all-zero when empty
    pub fn from_campsites(campsites: &[CampsiteRecord]) -> Self {
        let mut prices = campsites.iter().map(|c| c.price_per_night);
        let Some(first) = prices.next() else {
            return Self::default();
        };

        prices.fold(
            Self {
                min_price: first,
                max_price: first,
            },
            |range, price| Self {
                min_price: range.min_price.min(price),
                max_price: range.max_price.max(price),
            },
        )
    }
}

/// Aggregate price figures across the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceStatistics {
    /// Lowest nightly price
    pub min_price: f64,
    /// Highest nightly price
    pub max_price: f64,
    /// Mean nightly price
    pub average_price: f64,
}

impl PriceStatistics {
    /// Computes the statistics over `campsites`; all-zero when empty
    pub fn from_campsites(campsites: &[CampsiteRecord]) -> Self {
        if campsites.is_empty() {
            return Self::default();
        }

        let range = PriceRange::from_campsites(campsites);
        let total: f64 = campsites.iter().map(|c| c.price_per_night).sum();

        Self {
            min_price: range.min_price,
            max_price: range.max_price,
            average_price: total / campsites.len() as f64,
        }
    }

    /// The min/max part of the statistics
    pub fn range(&self) -> PriceRange {
        PriceRange {
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}

/// Errors raised by catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Caller supplied an invalid filter or preference value
    #[error("{0}")]
    InvalidInput(String),

    /// Two records in a catalog share an identifier
    #[error("Duplicate campsite id: {0}")]
    DuplicateId(u32),

    /// A record in a catalog violates a field constraint
    #[error("Invalid campsite {id}: {reason}")]
    InvalidRecord {
        /// Identifier of the offending record
        id: u32,
        /// Which constraint was violated
        reason: String,
    },

    /// A plain JSON value could not be mapped to a campsite record
    #[error("Mapping error: {0}")]
    Mapping(#[from] serde_json::Error),

    /// The selected backend does not implement this operation
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// The repository factory was asked for an unknown backend
    #[error("Unknown repository type: {0}")]
    UnknownRepository(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_campsites;

    #[test]
    fn test_amenity_parsing() {
        assert_eq!(" Water ".parse::<Amenity>().unwrap(), Amenity::Water);
        assert_eq!("ELECTRICITY".parse::<Amenity>().unwrap(), Amenity::Electricity);
        assert_eq!("restrooms".parse::<Amenity>().unwrap(), Amenity::Restrooms);

        let err = "pool".parse::<Amenity>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid amenity: pool. Valid options: water, electricity, restrooms"
        );
    }

    #[test]
    fn test_amenity_matching() {
        let lakeside = &sample_campsites()[1];

        assert!(lakeside.has_all_amenities(&[Amenity::Water, Amenity::Restrooms]));
        assert!(!lakeside.has_all_amenities(&Amenity::ALL));
        assert_eq!(lakeside.matched_amenities(&Amenity::ALL), 2);
        assert!(lakeside.has_all_amenities(&[]));
    }

    #[test]
    fn test_filter_validation() {
        let inverted = FilterCriteria {
            min_price: Some(30.0),
            max_price: Some(10.0),
            ..Default::default()
        };
        let err = inverted.validate().unwrap_err();
        assert_eq!(err.to_string(), "min_price cannot be greater than max_price");

        let negative = FilterCriteria {
            min_price: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(CatalogError::InvalidInput(_))
        ));

        let equal = FilterCriteria {
            min_price: Some(20.0),
            max_price: Some(20.0),
            ..Default::default()
        };
        assert!(equal.validate().is_ok());
    }

    #[test]
    fn test_zero_price_bounds_are_real_bounds() {
        let campsites = sample_campsites();
        let free_only = FilterCriteria {
            max_price: Some(0.0),
            ..Default::default()
        };
        assert!(campsites.iter().all(|c| !free_only.matches(c)));

        let from_zero = FilterCriteria {
            min_price: Some(0.0),
            ..Default::default()
        };
        assert!(campsites.iter().all(|c| from_zero.matches(c)));
    }

    #[test]
    fn test_blank_state_is_ignored() {
        let campsites = sample_campsites();
        let criteria = FilterCriteria {
            state: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(campsites.iter().all(|c| criteria.matches(c)));
    }

    #[test]
    fn test_price_statistics() {
        let stats = PriceStatistics::from_campsites(&sample_campsites());
        assert_eq!(stats.min_price, 15.0);
        assert_eq!(stats.max_price, 30.0);
        assert!((stats.average_price - 21.6).abs() < 1e-9);

        assert_eq!(PriceStatistics::from_campsites(&[]), PriceStatistics::default());
        assert_eq!(PriceRange::from_campsites(&[]), PriceRange::default());
    }

    #[test]
    fn test_trip_cost() {
        let pine_valley = &sample_campsites()[0];
        assert_eq!(pine_valley.total_cost(3), 75.0);
        assert!(pine_valley.is_within_budget(25.0));
        assert!(!pine_valley.is_within_budget(24.99));
    }
}
