use std::path::PathBuf;
use std::sync::Arc;

use campsite_catalog::mapper::load_campsites_from_json;
use campsite_catalog::{
    CampsiteRepository, CatalogError, InMemoryCampsiteRepository, RepositoryKind,
    create_campsite_repository,
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "postgres://localhost/campsites";

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind to (`SERVER_HOST`)
    pub host: String,
    /// Port to bind to (`SERVER_PORT`)
    pub port: u16,
    /// Catalog backend (`CAMPSITE_REPOSITORY`)
    pub repository: RepositoryKind,
    /// Connection string for the database backend (`DATABASE_URL`)
    pub database_url: String,
    /// Optional JSON catalog replacing the sample data (`CAMPSITE_SEED_FILE`)
    pub seed_file: Option<PathBuf>,
}

/// Errors raised while loading the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `SERVER_PORT` is not a valid port number
    #[error("Invalid SERVER_PORT: {0}")]
    InvalidPort(String),

    /// `CAMPSITE_REPOSITORY` names an unknown backend or the catalog is invalid
    #[error("Repository error: {0}")]
    Repository(#[from] CatalogError),

    /// The seed file could not be read
    #[error("Could not read seed file {path}: {source}")]
    SeedFile {
        /// Path that was configured
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl ServerConfig {
    /// Reads the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let repository = match lookup("CAMPSITE_REPOSITORY") {
            Some(raw) => raw.parse::<RepositoryKind>()?,
            None => RepositoryKind::default(),
        };

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let seed_file = lookup("CAMPSITE_SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            repository,
            database_url,
            seed_file,
        })
    }

    /// Socket address string for `HttpServer::bind`
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    /// Builds the configured catalog repository
    pub fn build_repository(&self) -> Result<Arc<dyn CampsiteRepository>, ConfigError> {
        match (&self.repository, &self.seed_file) {
            (RepositoryKind::Memory, Some(path)) => {
                let json = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedFile {
                    path: path.clone(),
                    source,
                })?;
                let campsites = load_campsites_from_json(&json)?;
                Ok(Arc::new(InMemoryCampsiteRepository::new(campsites)))
            }
            (RepositoryKind::Database, Some(_)) => {
                log::warn!("⚠️ CAMPSITE_SEED_FILE is ignored by the database repository");
                Ok(create_campsite_repository(
                    self.repository,
                    &self.database_url,
                ))
            }
            (kind, None) => Ok(create_campsite_repository(*kind, &self.database_url)),
        }
    }
}
