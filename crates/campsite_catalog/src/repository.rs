use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::filter::search_records;
use crate::seed::sample_campsites;
use crate::types::{AmenityFilter, CampsiteRecord, CatalogError, PriceRange};

/// Read access to a campsite catalog.
///
/// Every operation returns a fresh, owned result so callers never observe a
/// shared backing structure. Lookup by id yields `Ok(None)` when nothing
/// matches; errors are reserved for backend failures.
pub trait CampsiteRepository: Send + Sync {
    /// All campsites in catalog order
    fn get_all(&self) -> Result<Vec<CampsiteRecord>, CatalogError>;

    /// The campsite with the given id, if any
    fn get_by_id(&self, campsite_id: u32) -> Result<Option<CampsiteRecord>, CatalogError>;

    /// Campsites whose state equals `state`, ignoring case
    fn get_by_state(&self, state: &str) -> Result<Vec<CampsiteRecord>, CatalogError>;

    /// Campsites satisfying every provided amenity flag
    fn filter_by_amenities(
        &self,
        amenities: AmenityFilter,
    ) -> Result<Vec<CampsiteRecord>, CatalogError>;

    /// Campsites whose name, description or location contains `query`
    fn search(&self, query: Option<&str>) -> Result<Vec<CampsiteRecord>, CatalogError>;

    /// Distinct states, sorted ascending
    fn get_states(&self) -> Result<Vec<String>, CatalogError>;

    /// Number of campsites in the catalog
    fn count(&self) -> Result<usize, CatalogError>;

    /// Lowest and highest nightly price
    fn price_range(&self) -> Result<PriceRange, CatalogError>;
}

/// Catalog held entirely in memory and never mutated after construction
#[derive(Debug, Clone)]
pub struct InMemoryCampsiteRepository {
    campsites: Arc<[CampsiteRecord]>,
}

impl InMemoryCampsiteRepository {
    /// Creates a repository over the given records, keeping their order
    pub fn new(campsites: Vec<CampsiteRecord>) -> Self {
        Self {
            campsites: campsites.into(),
        }
    }

    /// Creates a repository over the built-in sample catalog
    pub fn with_sample_data() -> Self {
        Self::new(sample_campsites())
    }
}

impl CampsiteRepository for InMemoryCampsiteRepository {
    fn get_all(&self) -> Result<Vec<CampsiteRecord>, CatalogError> {
        Ok(self.campsites.to_vec())
    }

    fn get_by_id(&self, campsite_id: u32) -> Result<Option<CampsiteRecord>, CatalogError> {
        Ok(self
            .campsites
            .iter()
            .find(|campsite| campsite.id == campsite_id)
            .cloned())
    }

    fn get_by_state(&self, state: &str) -> Result<Vec<CampsiteRecord>, CatalogError> {
        Ok(self
            .campsites
            .iter()
            .filter(|campsite| campsite.is_in_state(state))
            .cloned()
            .collect())
    }

    fn filter_by_amenities(
        &self,
        amenities: AmenityFilter,
    ) -> Result<Vec<CampsiteRecord>, CatalogError> {
        Ok(self
            .campsites
            .iter()
            .filter(|campsite| amenities.matches(campsite))
            .cloned()
            .collect())
    }

    fn search(&self, query: Option<&str>) -> Result<Vec<CampsiteRecord>, CatalogError> {
        Ok(search_records(&self.campsites, query))
    }

    fn get_states(&self) -> Result<Vec<String>, CatalogError> {
        let states: BTreeSet<&str> = self
            .campsites
            .iter()
            .map(|campsite| campsite.state.as_str())
            .collect();

        Ok(states.into_iter().map(str::to_string).collect())
    }

    fn count(&self) -> Result<usize, CatalogError> {
        Ok(self.campsites.len())
    }

    fn price_range(&self) -> Result<PriceRange, CatalogError> {
        Ok(PriceRange::from_campsites(&self.campsites))
    }
}

/// Database-backed catalog.
///
/// Only the connection settings are kept; no operation is implemented yet and
/// each one reports [`CatalogError::NotImplemented`].
#[derive(Debug, Clone)]
pub struct DatabaseCampsiteRepository {
    connection_string: String,
}

impl DatabaseCampsiteRepository {
    /// Creates a repository pointing at `connection_string`
    pub fn new(connection_string: impl Into<String>) -> Self {
        let connection_string = connection_string.into();
        log::info!(
            "🗃️ Database repository initialized with: {}",
            connection_string
        );
        Self { connection_string }
    }

    /// The configured connection string
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    fn unavailable<T>(&self) -> Result<T, CatalogError> {
        log::warn!("⚠️ Database repository called but no backend is available");
        Err(CatalogError::NotImplemented("Database repository"))
    }
}

impl CampsiteRepository for DatabaseCampsiteRepository {
    fn get_all(&self) -> Result<Vec<CampsiteRecord>, CatalogError> {
        self.unavailable()
    }

    fn get_by_id(&self, _campsite_id: u32) -> Result<Option<CampsiteRecord>, CatalogError> {
        self.unavailable()
    }

    fn get_by_state(&self, _state: &str) -> Result<Vec<CampsiteRecord>, CatalogError> {
        self.unavailable()
    }

    fn filter_by_amenities(
        &self,
        _amenities: AmenityFilter,
    ) -> Result<Vec<CampsiteRecord>, CatalogError> {
        self.unavailable()
    }

    fn search(&self, _query: Option<&str>) -> Result<Vec<CampsiteRecord>, CatalogError> {
        self.unavailable()
    }

    fn get_states(&self) -> Result<Vec<String>, CatalogError> {
        self.unavailable()
    }

    fn count(&self) -> Result<usize, CatalogError> {
        self.unavailable()
    }

    fn price_range(&self) -> Result<PriceRange, CatalogError> {
        self.unavailable()
    }
}

/// Which repository backend to construct
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepositoryKind {
    /// In-memory catalog
    #[default]
    Memory,
    /// Database-backed catalog
    Database,
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryKind::Memory => f.write_str("memory"),
            RepositoryKind::Database => f.write_str("database"),
        }
    }
}

impl FromStr for RepositoryKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(RepositoryKind::Memory),
            "database" => Ok(RepositoryKind::Database),
            _ => Err(CatalogError::UnknownRepository(s.to_string())),
        }
    }
}

/// Builds the repository for `kind`; the memory backend uses the sample catalog.
pub fn create_campsite_repository(
    kind: RepositoryKind,
    database_url: &str,
) -> Arc<dyn CampsiteRepository> {
    match kind {
        RepositoryKind::Memory => Arc::new(InMemoryCampsiteRepository::with_sample_data()),
        RepositoryKind::Database => Arc::new(DatabaseCampsiteRepository::new(database_url)),
    }
}
