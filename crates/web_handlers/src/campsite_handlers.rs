use actix_web::{HttpResponse, Result, web};
use campsite_catalog::mapper::campsite_to_value;
use validator::Validate;

use crate::api_types::*;
use crate::campsite_service::CampsiteService;

/// Welcome endpoint confirming the API is running
pub async fn api_root() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Welcome to Campsite Reservation API".to_string(),
    }))
}

/// Lists campsites matching the optional state, amenity, price and search filters
pub async fn list_campsites(
    service: web::Data<CampsiteService>,
    query: web::Query<CampsiteQuery>,
) -> Result<HttpResponse, ApiError> {
    // Validate the request
    query
        .validate()
        .map_err(|e| ApiError::Validation(format!("Validation error: {}", e)))?;

    let campsites = service.filter_campsites(&query.to_filter())?;
    let total_count = service.get_campsite_count()?;

    let response = CampsiteListResponse {
        filtered_count: campsites.len(),
        total_count,
        campsites,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Gets a single campsite by ID
pub async fn get_campsite(
    service: web::Data<CampsiteService>,
    path: web::Path<u32>,
) -> Result<HttpResponse, ApiError> {
    let campsite_id = path.into_inner();
    let campsite = service
        .get_campsite_by_id(campsite_id)?
        .ok_or(ApiError::CampsiteNotFound(campsite_id))?;

    Ok(HttpResponse::Ok().json(campsite))
}

/// Scores the catalog against the posted preferences and returns the ranking
pub async fn recommend_campsites(
    service: web::Data<CampsiteService>,
    request: web::Json<UserPreferencesRequest>,
) -> Result<HttpResponse, ApiError> {
    // Validate the request
    request
        .validate()
        .map_err(|e| ApiError::Validation(format!("Validation error: {}", e)))?;

    let preferences = request.to_profile()?;
    let recommendations = service.get_recommended_campsites(&preferences)?;

    let mut entries = Vec::with_capacity(recommendations.len());
    for recommendation in recommendations {
        let mut entry = campsite_to_value(&recommendation.campsite)?;
        if let Some(fields) = entry.as_object_mut() {
            fields.insert(
                "recommendation_score".to_string(),
                serde_json::json!(recommendation.score),
            );
            fields.insert(
                "matching_criteria".to_string(),
                serde_json::json!(recommendation.matching_criteria),
            );
        }
        entries.push(entry);
    }

    let response = RecommendationResponse {
        total_count: entries.len(),
        recommendations: entries,
        preferences_used: preferences,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Calculates the total cost of staying at a campsite for a number of nights
pub async fn calculate_trip_cost(
    service: web::Data<CampsiteService>,
    path: web::Path<u32>,
    query: web::Query<TripCostQuery>,
) -> Result<HttpResponse, ApiError> {
    query
        .validate()
        .map_err(|e| ApiError::Validation(format!("Validation error: {}", e)))?;

    let campsite_id = path.into_inner();
    let total_cost = service
        .calculate_trip_cost(campsite_id, query.nights)?
        .ok_or(ApiError::CampsiteNotFound(campsite_id))?;

    Ok(HttpResponse::Ok().json(TripCostResponse {
        campsite_id,
        nights: query.nights,
        total_cost,
        currency: "USD",
    }))
}

/// Health check with catalog size and price range
pub async fn health_check(service: web::Data<CampsiteService>) -> Result<HttpResponse, ApiError> {
    let response = HealthResponse {
        status: "healthy",
        total_campsites: service.get_campsite_count()?,
        price_range: service.get_price_range()?,
        timestamp: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Lists the states that have campsites
pub async fn list_states(service: web::Data<CampsiteService>) -> Result<HttpResponse, ApiError> {
    let states = service.get_available_states()?;
    Ok(HttpResponse::Ok().json(states))
}

/// Catalog statistics: counts, states and price figures
pub async fn get_statistics(
    service: web::Data<CampsiteService>,
) -> Result<HttpResponse, ApiError> {
    let states = service.get_available_states()?;

    let response = StatsResponse {
        total_campsites: service.get_campsite_count()?,
        available_states: states.len(),
        states,
        price_range: service.get_price_statistics()?,
    };

    Ok(HttpResponse::Ok().json(response))
}
