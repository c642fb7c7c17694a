//! # Campsite Catalog
//!
//! This crate provides the read-only campsite catalog: the record types, the
//! fixed amenity vocabulary, filter criteria, price statistics and the
//! repository seam used to swap the in-memory store for another backend.

/// Campsite record, amenity and filter types
mod types;
pub use types::*;

/// Structural filtering and free-text search over campsite records
pub mod filter;
pub use filter::{apply_filter, search_records};

/// Mapping between campsite records and plain JSON values
pub mod mapper;

/// Repository trait with its in-memory and database implementations
pub mod repository;
pub use repository::{
    CampsiteRepository, DatabaseCampsiteRepository, InMemoryCampsiteRepository, RepositoryKind,
    create_campsite_repository,
};

/// Built-in sample catalog loaded at startup
pub mod seed;
pub use seed::sample_campsites;
