use campsite_catalog::{
    AmenityFilter, CampsiteRecord, CatalogError, FilterCriteria, PriceRange, PriceStatistics,
};
use chrono::{DateTime, Utc};
use recommendation_engine::PreferenceProfile;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters accepted by the campsite listing endpoint
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CampsiteQuery {
    /// Filter by state (e.g. "California")
    pub state: Option<String>,
    /// Filter by water availability
    pub has_water: Option<bool>,
    /// Filter by electricity availability
    pub has_electricity: Option<bool>,
    /// Filter by restroom availability
    pub has_restrooms: Option<bool>,
    /// Search by name, description or location
    #[validate(length(min = 1, message = "Search query cannot be empty"))]
    pub search: Option<String>,
    /// Minimum price per night
    #[validate(range(min = 0.0, message = "min_price must be non-negative"))]
    pub min_price: Option<f64>,
    /// Maximum price per night
    #[validate(range(min = 0.0, message = "max_price must be non-negative"))]
    pub max_price: Option<f64>,
}

impl CampsiteQuery {
    /// Converts the query parameters into catalog filter criteria
    pub fn to_filter(&self) -> FilterCriteria {
        FilterCriteria {
            state: self.state.clone(),
            amenities: AmenityFilter {
                has_water: self.has_water,
                has_electricity: self.has_electricity,
                has_restrooms: self.has_restrooms,
            },
            min_price: self.min_price,
            max_price: self.max_price,
            search_query: self.search.clone(),
        }
    }
}

/// Response structure for the campsite listing
#[derive(Debug, Serialize)]
pub struct CampsiteListResponse {
    /// Campsites matching the filter
    pub campsites: Vec<CampsiteRecord>,
    /// Number of campsites in the whole catalog
    pub total_count: usize,
    /// Number of campsites after filtering
    pub filtered_count: usize,
}

/// Request body for personalised recommendations
#[derive(Debug, Deserialize, Validate)]
pub struct UserPreferencesRequest {
    /// Preferred state for camping
    pub preferred_state: Option<String>,
    /// Maximum budget per night
    #[validate(range(min = 0.0, max = 1000.0, message = "max_budget must be between 0 and 1000"))]
    pub max_budget: Option<f64>,
    /// Required amenities (water, electricity, restrooms)
    #[serde(default)]
    pub required_amenities: Vec<String>,
    /// Preferred activities (hiking, fishing, swimming)
    #[serde(default)]
    pub preferred_activities: Vec<String>,
}

impl UserPreferencesRequest {
    /// Validates amenity tokens and builds the engine's preference profile
    pub fn to_profile(&self) -> Result<PreferenceProfile, CatalogError> {
        PreferenceProfile::from_raw(
            self.preferred_state.clone(),
            self.max_budget,
            self.required_amenities.as_slice(),
            self.preferred_activities.clone(),
        )
    }
}

/// Response structure for recommendations
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    /// Recommended campsites, each with `recommendation_score` and `matching_criteria`
    pub recommendations: Vec<serde_json::Value>,
    /// Number of recommendations
    pub total_count: usize,
    /// Normalised preferences the scores were computed from
    pub preferences_used: PreferenceProfile,
}

/// Query parameters for the trip cost endpoint
#[derive(Debug, Deserialize, Validate)]
pub struct TripCostQuery {
    /// Number of nights to stay
    #[validate(range(min = 1, max = 30, message = "nights must be between 1 and 30"))]
    pub nights: u32,
}

/// Response structure for the trip cost endpoint
#[derive(Debug, Serialize)]
pub struct TripCostResponse {
    /// Campsite the cost was calculated for
    pub campsite_id: u32,
    /// Number of nights
    pub nights: u32,
    /// Total cost of the stay
    pub total_cost: f64,
    /// Currency of `total_cost`
    pub currency: &'static str,
}

/// Response structure for the health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service health status
    pub status: &'static str,
    /// Number of campsites in the catalog
    pub total_campsites: usize,
    /// Lowest and highest nightly price
    pub price_range: PriceRange,
    /// When the check ran
    pub timestamp: DateTime<Utc>,
}

/// Response structure for catalog statistics
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Number of campsites in the catalog
    pub total_campsites: usize,
    /// Number of states with campsites
    pub available_states: usize,
    /// States with campsites, sorted
    pub states: Vec<String>,
    /// Price statistics
    pub price_range: PriceStatistics,
}

/// Simple message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Response message
    pub message: String,
}

/// Custom error type for campsite API operations
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Catalog or recommendation error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Request validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Campsite not found
    #[error("Campsite with ID {0} not found")]
    CampsiteNotFound(u32),
}

impl actix_web::ResponseError for ApiError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            ApiError::Validation(msg) | ApiError::Catalog(CatalogError::InvalidInput(msg)) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "validation_error",
                    "message": msg
                }))
            }
            ApiError::CampsiteNotFound(id) => HttpResponse::NotFound().json(serde_json::json!({
                "error": "campsite_not_found",
                "message": format!("Campsite with ID {} not found", id)
            })),
            _ => {
                log::error!("❌ Request failed: {}", self);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "internal_error",
                    "message": "An internal error occurred"
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_maps_to_filter() {
        let query = CampsiteQuery {
            state: Some("Oregon".to_string()),
            has_water: Some(true),
            max_price: Some(25.0),
            ..Default::default()
        };
        let filter = query.to_filter();

        assert_eq!(filter.state.as_deref(), Some("Oregon"));
        assert_eq!(filter.amenities.has_water, Some(true));
        assert_eq!(filter.amenities.has_restrooms, None);
        assert_eq!(filter.max_price, Some(25.0));
        assert_eq!(filter.min_price, None);
    }

    #[test]
    fn test_query_validation() {
        let empty_search = CampsiteQuery {
            search: Some(String::new()),
            ..Default::default()
        };
        assert!(empty_search.validate().is_err());

        let negative_price = CampsiteQuery {
            min_price: Some(-1.0),
            ..Default::default()
        };
        assert!(negative_price.validate().is_err());

        assert!(CampsiteQuery::default().validate().is_ok());
    }

    #[test]
    fn test_nights_are_capped() {
        assert!(TripCostQuery { nights: 0 }.validate().is_err());
        assert!(TripCostQuery { nights: 1 }.validate().is_ok());
        assert!(TripCostQuery { nights: 30 }.validate().is_ok());
        assert!(TripCostQuery { nights: 31 }.validate().is_err());
    }

    #[test]
    fn test_preferences_request_to_profile() {
        let request: UserPreferencesRequest = serde_json::from_value(serde_json::json!({
            "preferred_state": "California",
            "required_amenities": ["Water"]
        }))
        .unwrap();
        assert!(request.preferred_activities.is_empty());

        let profile = request.to_profile().unwrap();
        assert_eq!(profile.preferred_state(), Some("California"));
        assert_eq!(profile.required_amenities().len(), 1);

        let invalid = UserPreferencesRequest {
            preferred_state: None,
            max_budget: None,
            required_amenities: vec!["hot tub".to_string()],
            preferred_activities: vec![],
        };
        assert!(matches!(
            invalid.to_profile(),
            Err(CatalogError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_budget_range_validation() {
        let too_rich = UserPreferencesRequest {
            preferred_state: None,
            max_budget: Some(5000.0),
            required_amenities: vec![],
            preferred_activities: vec![],
        };
        assert!(too_rich.validate().is_err());
    }
}
