//! Storage errors for the route adapters

use std::path::PathBuf;

use thiserror::Error;
use voyage_domain::{RepositoryError, RouteError};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate route id '{0}'")]
    DuplicateRoute(String),

    #[error(transparent)]
    InvalidRoute(#[from] RouteError),

    #[error("Failed to acquire {0} lock")]
    Poisoned(&'static str),
}

impl From<StorageError> for RepositoryError {
    fn from(err: StorageError) -> Self {
        RepositoryError::Persistence {
            message: err.to_string(),
        }
    }
}
