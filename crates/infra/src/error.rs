//! Ingestion failures.

use std::path::PathBuf;

use thiserror::Error;

use storefront_core::DomainError;

/// Why a catalog could not be loaded.
///
/// [`crate::CatalogLoader::load_catalog`] never returns these; it logs them and hands
/// back an empty catalog. Use [`crate::CatalogLoader::try_load_catalog`] to see them.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("catalog file {} not found after {} replacement attempt(s)", .path.display(), .attempts)]
    NotFound { path: PathBuf, attempts: u32 },

    #[error("failed to read catalog file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog file {} is not valid catalog JSON", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid product in category '{category}'")]
    Build {
        category: String,
        #[source]
        source: DomainError,
    },
}
