//! JSON File Route Repository
//!
//! Routes live in a single JSON array on disk. The baseline flag is part
//! of each record, so the choice survives restarts.

use std::path::{Path, PathBuf};

use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use voyage_domain::{
    RepositoryError, Route, RouteComparison, RouteFilters, RouteId, RouteRepositoryPort,
};

use crate::error::StorageError;
use crate::record::RouteRecord;
use crate::repository::{apply_baseline, prepare_routes};
use crate::seed::seed_routes;

/// File-backed Route Repository
///
/// The whole file is loaded on [`open`](Self::open) and rewritten on every
/// baseline change. Writers are serialized by the lock; the file is replaced
/// through a temp sibling so readers never see a half-written file.
#[derive(Debug)]
pub struct JsonFileRouteRepository {
    path: PathBuf,
    routes: RwLock<Vec<Route>>,
}

impl JsonFileRouteRepository {
    /// Load routes from `path`
    ///
    /// A missing file is created from the default data set.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        let routes = match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let routes = parse_routes(&path, &content)?;
                info!(path = %path.display(), count = routes.len(), "Loaded routes");
                routes
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let routes = seed_routes();
                write_routes(&path, &routes).await?;
                info!(path = %path.display(), "Created route file from seed data");
                routes
            }
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        Ok(Self {
            path,
            routes: RwLock::new(routes),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_routes(path: &Path, content: &str) -> Result<Vec<Route>, StorageError> {
    let records: Vec<RouteRecord> =
        serde_json::from_str(content).map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let routes = records
        .into_iter()
        .map(RouteRecord::into_route)
        .collect::<Result<Vec<_>, _>>()?;

    prepare_routes(routes)
}

async fn write_routes(path: &Path, routes: &[Route]) -> Result<(), StorageError> {
    let records: Vec<RouteRecord> = routes.iter().map(RouteRecord::from).collect();
    let json = serde_json::to_string_pretty(&records).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, json)
        .await
        .map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
    if let Err(source) = tokio::fs::rename(&tmp, path).await {
        if let Err(e) = tokio::fs::remove_file(&tmp).await {
            warn!(path = %tmp.display(), error = %e, "Failed to remove temp route file");
        }
        return Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!(path = %path.display(), count = routes.len(), "Route file written");
    Ok(())
}

impl RouteRepositoryPort for JsonFileRouteRepository {
    async fn find_all(&self, filters: RouteFilters) -> Result<Vec<Route>, RepositoryError> {
        let routes = self.routes.read().await;
        Ok(routes
            .iter()
            .filter(|r| filters.matches(r))
            .cloned()
            .collect())
    }

    async fn set_baseline(&self, route_id: &RouteId) -> Result<(), RepositoryError> {
        let mut routes = self.routes.write().await;

        // Commit in memory only once the file is on disk
        let mut updated = routes.clone();
        apply_baseline(&mut updated, route_id)?;
        write_routes(&self.path, &updated).await?;
        *routes = updated;

        info!(route_id = %route_id, path = %self.path.display(), "Baseline persisted");
        Ok(())
    }

    async fn get_comparison(&self) -> Result<RouteComparison, RepositoryError> {
        let routes = self.routes.read().await;
        Ok(RouteComparison::from_routes(routes.iter().cloned()))
    }
}
