use std::collections::HashSet;

use serde_json::Value;

use crate::types::{CampsiteRecord, CatalogError};

/// Converts a campsite record into a plain JSON object.
pub fn campsite_to_value(campsite: &CampsiteRecord) -> Result<Value, CatalogError> {
    Ok(serde_json::to_value(campsite)?)
}

/// Converts a plain JSON object back into a campsite record.
pub fn value_to_campsite(value: Value) -> Result<CampsiteRecord, CatalogError> {
    Ok(serde_json::from_value(value)?)
}

/// Parses a JSON array of campsite records and validates it as a catalog.
pub fn load_campsites_from_json(json: &str) -> Result<Vec<CampsiteRecord>, CatalogError> {
    let campsites: Vec<CampsiteRecord> = serde_json::from_str(json)?;
    validate_catalog(&campsites)?;

    log::info!("📦 Loaded {} campsites from JSON catalog", campsites.len());
    Ok(campsites)
}

/// Checks that identifiers are positive and unique and that prices are
/// finite and non-negative.
pub fn validate_catalog(campsites: &[CampsiteRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(campsites.len());

    for campsite in campsites {
        if campsite.id == 0 {
            return Err(CatalogError::InvalidRecord {
                id: campsite.id,
                reason: "id must be positive".to_string(),
            });
        }
        if !seen.insert(campsite.id) {
            return Err(CatalogError::DuplicateId(campsite.id));
        }
        if !campsite.price_per_night.is_finite() || campsite.price_per_night < 0.0 {
            return Err(CatalogError::InvalidRecord {
                id: campsite.id,
                reason: "price_per_night must be a non-negative number".to_string(),
            });
        }
    }

    Ok(())
}
