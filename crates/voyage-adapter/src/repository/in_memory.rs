//! In-Memory Route Repository
//!
//! Keeps routes in a Vec so listing order is insertion order.
//! The baseline lives only as long as the process.

use std::sync::{Arc, RwLock};

use tracing::debug;
use voyage_domain::{
    RepositoryError, Route, RouteComparison, RouteFilters, RouteId, RouteRepositoryPort,
};

use crate::error::StorageError;
use crate::repository::{apply_baseline, prepare_routes};
use crate::seed::seed_routes;

/// In-memory Route Repository
///
/// Thread-safe implementation using RwLock. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRouteRepository {
    routes: Arc<RwLock<Vec<Route>>>,
}

impl InMemoryRouteRepository {
    /// Empty repository, no baseline
    pub fn new() -> Self {
        Self {
            routes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Repository holding `routes`
    ///
    /// Fails on duplicate ids. Only the first route flagged as baseline
    /// keeps the flag.
    pub fn with_routes(routes: Vec<Route>) -> Result<Self, StorageError> {
        let routes = prepare_routes(routes)?;
        Ok(Self {
            routes: Arc::new(RwLock::new(routes)),
        })
    }

    /// Repository holding the default data set
    pub fn seeded() -> Self {
        Self {
            routes: Arc::new(RwLock::new(seed_routes())),
        }
    }
}

impl RouteRepositoryPort for InMemoryRouteRepository {
    async fn find_all(&self, filters: RouteFilters) -> Result<Vec<Route>, RepositoryError> {
        let routes = self
            .routes
            .read()
            .map_err(|_| StorageError::Poisoned("read"))?;
        Ok(routes
            .iter()
            .filter(|r| filters.matches(r))
            .cloned()
            .collect())
    }

    async fn set_baseline(&self, route_id: &RouteId) -> Result<(), RepositoryError> {
        let mut routes = self
            .routes
            .write()
            .map_err(|_| StorageError::Poisoned("write"))?;
        apply_baseline(&mut routes, route_id)?;
        debug!(route_id = %route_id, "In-memory baseline updated");
        Ok(())
    }

    async fn get_comparison(&self) -> Result<RouteComparison, RepositoryError> {
        let routes = self
            .routes
            .read()
            .map_err(|_| StorageError::Poisoned("read"))?;
        Ok(RouteComparison::from_routes(routes.iter().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_domain::{FuelType, VesselType};

    fn ids(routes: &[Route]) -> Vec<&str> {
        routes.iter().map(|r| r.id().as_str()).collect()
    }

    #[tokio::test]
    async fn test_find_all_without_filters_returns_everything() {
        let repo = InMemoryRouteRepository::seeded();

        let routes = repo.find_all(RouteFilters::default()).await.unwrap();
        assert_eq!(ids(&routes), vec!["R001", "R002", "R003", "R004", "R005"]);
    }

    #[tokio::test]
    async fn test_every_filter_combination_is_conjunctive() {
        let repo = InMemoryRouteRepository::seeded();
        let all = repo.list_all().await.unwrap();

        let vessels = [None, Some("Container"), Some("RoRo")];
        let fuels = [None, Some("HFO"), Some("LNG")];
        let years = [None, Some(2024), Some(2025)];

        for vessel in vessels {
            for fuel in fuels {
                for year in years {
                    let filters = RouteFilters {
                        vessel_type: vessel.map(VesselType::new),
                        fuel_type: fuel.map(FuelType::new),
                        year,
                    };

                    let found = repo.find_all(filters.clone()).await.unwrap();
                    let expected: Vec<&Route> =
                        all.iter().filter(|r| filters.matches(r)).collect();

                    assert_eq!(found.len(), expected.len(), "{:?}", filters);
                    assert!(found.iter().all(|r| {
                        vessel.map_or(true, |v| r.vessel_type().as_str() == v)
                            && fuel.map_or(true, |f| r.fuel_type().as_str() == f)
                            && year.map_or(true, |y| r.year() == y)
                    }));
                }
            }
        }
    }

    #[tokio::test]
    async fn test_container_lng_2025() {
        let repo = InMemoryRouteRepository::seeded();

        let routes = repo
            .find_all(
                RouteFilters::new()
                    .with_vessel_type(VesselType::new("Container"))
                    .with_fuel_type(FuelType::new("LNG"))
                    .with_year(2025),
            )
            .await
            .unwrap();
        assert_eq!(ids(&routes), vec!["R005"]);
    }

    #[tokio::test]
    async fn test_no_baseline_before_set() {
        let repo = InMemoryRouteRepository::seeded();

        let pairing = repo.get_comparison().await.unwrap();
        assert!(pairing.baseline.is_none());
        assert_eq!(pairing.comparison.len(), 5);
    }

    #[tokio::test]
    async fn test_set_baseline_then_compare() {
        let repo = InMemoryRouteRepository::seeded();

        repo.set_baseline(&RouteId::new("R003")).await.unwrap();

        let pairing = repo.get_comparison().await.unwrap();
        assert_eq!(pairing.baseline.unwrap().id().as_str(), "R003");
        assert_eq!(ids(&pairing.comparison), vec!["R001", "R002", "R004", "R005"]);
    }

    #[tokio::test]
    async fn test_set_baseline_is_idempotent() {
        let repo = InMemoryRouteRepository::seeded();

        repo.set_baseline(&RouteId::new("R002")).await.unwrap();
        let first = repo.get_comparison().await.unwrap();

        repo.set_baseline(&RouteId::new("R002")).await.unwrap();
        let second = repo.get_comparison().await.unwrap();

        assert_eq!(first, second);
        let flagged = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.is_baseline())
            .count();
        assert_eq!(flagged, 1);
    }

    #[tokio::test]
    async fn test_unknown_baseline_rejected() {
        let repo = InMemoryRouteRepository::seeded();
        repo.set_baseline(&RouteId::new("R001")).await.unwrap();

        let err = repo.set_baseline(&RouteId::new("R404")).await.unwrap_err();
        assert_eq!(
            err,
            RepositoryError::NotFound {
                id: "R404".to_string()
            }
        );

        let pairing = repo.get_comparison().await.unwrap();
        assert_eq!(pairing.baseline.unwrap().id().as_str(), "R001");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryRouteRepository::seeded();
        let handle = repo.clone();

        handle.set_baseline(&RouteId::new("R004")).await.unwrap();

        let pairing = repo.get_comparison().await.unwrap();
        assert_eq!(pairing.baseline.unwrap().id().as_str(), "R004");
    }

    #[tokio::test]
    async fn test_concurrent_baseline_leaves_single_flag() {
        let repo = InMemoryRouteRepository::seeded();

        let mut tasks = Vec::new();
        for id in ["R001", "R002", "R003", "R004", "R005"] {
            let repo = repo.clone();
            tasks.push(tokio::spawn(async move {
                repo.set_baseline(&RouteId::new(id)).await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let routes = repo.list_all().await.unwrap();
        assert_eq!(routes.iter().filter(|r| r.is_baseline()).count(), 1);
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = InMemoryRouteRepository::new();

        assert!(repo.list_all().await.unwrap().is_empty());

        let pairing = repo.get_comparison().await.unwrap();
        assert!(pairing.baseline.is_none());
        assert!(pairing.comparison.is_empty());
    }
}
