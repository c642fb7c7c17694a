use std::sync::Arc;

use campsite_catalog::{
    CampsiteRecord, CampsiteRepository, CatalogError, FilterCriteria, PriceRange, PriceStatistics,
    apply_filter,
};
use recommendation_engine::{PreferenceProfile, ScoredRecommendation, recommend};

/// Service for campsite catalog operations
#[derive(Clone)]
pub struct CampsiteService {
    repository: Arc<dyn CampsiteRepository>,
}

impl CampsiteService {
    /// Creates a new instance of `CampsiteService` over the given repository
    pub fn new(repository: Arc<dyn CampsiteRepository>) -> Self {
        Self { repository }
    }

    /// Gets every campsite in catalog order
    pub fn get_all_campsites(&self) -> Result<Vec<CampsiteRecord>, CatalogError> {
        self.repository.get_all()
    }

    /// Gets a campsite by ID; `None` when it does not exist
    pub fn get_campsite_by_id(
        &self,
        campsite_id: u32,
    ) -> Result<Option<CampsiteRecord>, CatalogError> {
        if campsite_id == 0 {
            return Ok(None);
        }

        self.repository.get_by_id(campsite_id)
    }

    /// Filters the catalog, rejecting invalid criteria before any record is read
    pub fn filter_campsites(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<CampsiteRecord>, CatalogError> {
        criteria.validate()?;

        let campsites = self.repository.get_all()?;
        let filtered = apply_filter(&campsites, criteria);

        log::debug!(
            "🔍 Filter matched {} of {} campsites",
            filtered.len(),
            campsites.len()
        );
        Ok(filtered)
    }

    /// Searches campsites by name, description or location
    pub fn search_campsites(&self, query: &str) -> Result<Vec<CampsiteRecord>, CatalogError> {
        self.repository.search(Some(query))
    }

    /// Gets campsites within an inclusive price range
    pub fn get_campsites_by_price_range(
        &self,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Result<Vec<CampsiteRecord>, CatalogError> {
        self.filter_campsites(&FilterCriteria {
            min_price,
            max_price,
            ..Default::default()
        })
    }

    /// Gets the sorted list of states that have campsites
    pub fn get_available_states(&self) -> Result<Vec<String>, CatalogError> {
        self.repository.get_states()
    }

    /// Gets the number of campsites in the catalog
    pub fn get_campsite_count(&self) -> Result<usize, CatalogError> {
        self.repository.count()
    }

    /// Gets the lowest and highest nightly price
    pub fn get_price_range(&self) -> Result<PriceRange, CatalogError> {
        self.repository.price_range()
    }

    /// Gets min, max and average nightly price
    pub fn get_price_statistics(&self) -> Result<PriceStatistics, CatalogError> {
        let campsites = self.repository.get_all()?;
        Ok(PriceStatistics::from_campsites(&campsites))
    }

    /// Ranks the catalog against the visitor's preferences
    pub fn get_recommended_campsites(
        &self,
        preferences: &PreferenceProfile,
    ) -> Result<Vec<ScoredRecommendation>, CatalogError> {
        let campsites = self.repository.get_all()?;
        let recommendations = recommend(&campsites, preferences);

        log::info!(
            "🏕️ Generated {} recommendations from {} campsites",
            recommendations.len(),
            campsites.len()
        );
        Ok(recommendations)
    }

    /// Total cost of a stay; `None` when the campsite does not exist
    pub fn calculate_trip_cost(
        &self,
        campsite_id: u32,
        nights: u32,
    ) -> Result<Option<f64>, CatalogError> {
        Ok(self
            .get_campsite_by_id(campsite_id)?
            .map(|campsite| campsite.total_cost(nights)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campsite_catalog::{DatabaseCampsiteRepository, InMemoryCampsiteRepository};

    fn sample_service() -> CampsiteService {
        CampsiteService::new(Arc::new(InMemoryCampsiteRepository::with_sample_data()))
    }

    #[test]
    fn test_trip_cost() {
        let service = sample_service();

        assert_eq!(service.calculate_trip_cost(1, 3).unwrap(), Some(75.0));
        assert_eq!(service.calculate_trip_cost(999, 3).unwrap(), None);
        assert_eq!(service.calculate_trip_cost(0, 3).unwrap(), None);
    }

    #[test]
    fn test_invalid_filter_fails_before_reading() {
        // the database backend would fail on read, so an InvalidInput error
        // proves validation ran first
        let service = CampsiteService::new(Arc::new(DatabaseCampsiteRepository::new("db")));

        let result = service.get_campsites_by_price_range(Some(40.0), Some(10.0));
        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }

    #[test]
    fn test_price_range_query() {
        let service = sample_service();

        let ids: Vec<u32> = service
            .get_campsites_by_price_range(Some(18.0), None)
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_search_with_blank_query_returns_all() {
        let service = sample_service();
        assert_eq!(service.search_campsites("  ").unwrap().len(), 5);
        assert_eq!(service.search_campsites("desert").unwrap().len(), 1);
    }

    #[test]
    fn test_statistics() {
        let service = sample_service();

        assert_eq!(service.get_campsite_count().unwrap(), 5);
        assert_eq!(service.get_available_states().unwrap().len(), 5);

        let stats = service.get_price_statistics().unwrap();
        assert_eq!(stats.range(), service.get_price_range().unwrap());
    }

    #[test]
    fn test_backend_failures_propagate() {
        let service = CampsiteService::new(Arc::new(DatabaseCampsiteRepository::new("db")));

        assert!(service.get_all_campsites().is_err());
        assert!(
            service
                .get_recommended_campsites(&PreferenceProfile::default())
                .is_err()
        );
        assert!(service.calculate_trip_cost(1, 2).is_err());
    }
}
