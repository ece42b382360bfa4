//! RouteService - Listing, baseline selection and comparison

use thiserror::Error;
use tracing::{debug, info};

use voyage_domain::{
    ComparisonReport, RepositoryError, Route, RouteFilters, RouteId, RouteRepositoryPort,
    TARGET_INTENSITY_2025,
};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("No baseline route has been set")]
    NoBaseline,

    #[error("Target intensity must be a positive number, got {0}")]
    InvalidTarget(f64),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Application service over a route repository
///
/// The repository is injected at construction; swapping the in-memory
/// adapter for the file adapter doesn't touch this code.
#[derive(Debug)]
pub struct RouteService<R> {
    repository: R,
    target_intensity: f64,
}

impl<R: RouteRepositoryPort> RouteService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            target_intensity: TARGET_INTENSITY_2025,
        }
    }

    /// Builder: compare against a different GHG intensity target
    ///
    /// The target must be finite and strictly positive.
    pub fn with_target_intensity(mut self, target_intensity: f64) -> Result<Self> {
        if !target_intensity.is_finite() || target_intensity <= 0.0 {
            return Err(ServiceError::InvalidTarget(target_intensity));
        }
        self.target_intensity = target_intensity;
        Ok(self)
    }

    pub fn target_intensity(&self) -> f64 {
        self.target_intensity
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// List routes matching the filters
    pub async fn list_routes(&self, filters: RouteFilters) -> Result<Vec<Route>> {
        debug!(?filters, "Listing routes");
        let routes = self.repository.find_all(filters).await?;
        debug!(count = routes.len(), "Routes listed");
        Ok(routes)
    }

    /// Choose the baseline route
    pub async fn set_baseline(&self, route_id: &RouteId) -> Result<()> {
        self.repository.set_baseline(route_id).await?;
        info!(route_id = %route_id, "Baseline set");
        Ok(())
    }

    /// Measure every other route against the baseline
    pub async fn compare(&self) -> Result<ComparisonReport> {
        let pairing = self.repository.get_comparison().await?;
        let report = ComparisonReport::build(pairing, self.target_intensity)
            .ok_or(ServiceError::NoBaseline)?;

        info!(
            baseline = %report.baseline.id(),
            routes = report.rows.len(),
            compliant = report.compliant_count(),
            "Comparison built"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use voyage_domain::{FuelType, RouteComparison, VesselType};

    struct StubRepo {
        routes: Mutex<Vec<Route>>,
    }

    impl StubRepo {
        fn new(routes: Vec<Route>) -> Self {
            Self {
                routes: Mutex::new(routes),
            }
        }
    }

    impl RouteRepositoryPort for StubRepo {
        async fn find_all(
            &self,
            filters: RouteFilters,
        ) -> std::result::Result<Vec<Route>, RepositoryError> {
            let routes = self.routes.lock().unwrap();
            Ok(routes.iter().filter(|r| filters.matches(r)).cloned().collect())
        }

        async fn set_baseline(
            &self,
            route_id: &RouteId,
        ) -> std::result::Result<(), RepositoryError> {
            let mut routes = self.routes.lock().unwrap();
            if !routes.iter().any(|r| r.id() == route_id) {
                return Err(RepositoryError::NotFound {
                    id: route_id.to_string(),
                });
            }
            for route in routes.iter_mut() {
                if route.id() == route_id {
                    route.mark_baseline();
                } else {
                    route.clear_baseline();
                }
            }
            Ok(())
        }

        async fn get_comparison(&self) -> std::result::Result<RouteComparison, RepositoryError> {
            let routes = self.routes.lock().unwrap();
            Ok(RouteComparison::from_routes(routes.iter().cloned()))
        }
    }

    /// Repository whose storage is always broken
    struct BrokenRepo;

    impl RouteRepositoryPort for BrokenRepo {
        async fn find_all(
            &self,
            _filters: RouteFilters,
        ) -> std::result::Result<Vec<Route>, RepositoryError> {
            Err(RepositoryError::Persistence {
                message: "disk on fire".to_string(),
            })
        }

        async fn set_baseline(
            &self,
            _route_id: &RouteId,
        ) -> std::result::Result<(), RepositoryError> {
            Err(RepositoryError::Persistence {
                message: "disk on fire".to_string(),
            })
        }

        async fn get_comparison(&self) -> std::result::Result<RouteComparison, RepositoryError> {
            Err(RepositoryError::Persistence {
                message: "disk on fire".to_string(),
            })
        }
    }

    fn route(id: &str, fuel: &str, intensity: f64) -> Route {
        Route::new(
            RouteId::new(id),
            VesselType::new("Container"),
            FuelType::new(fuel),
            2024,
        )
        .with_ghg_intensity(intensity)
    }

    fn service() -> RouteService<StubRepo> {
        RouteService::new(StubRepo::new(vec![
            route("R001", "HFO", 91.0),
            route("R002", "LNG", 88.0),
            route("R003", "MGO", 93.5),
        ]))
    }

    #[tokio::test]
    async fn test_list_routes_filters() {
        let service = service();

        let all = service.list_routes(RouteFilters::new()).await.unwrap();
        assert_eq!(all.len(), 3);

        let lng = service
            .list_routes(RouteFilters::new().with_fuel_type(FuelType::new("LNG")))
            .await
            .unwrap();
        assert_eq!(lng.len(), 1);
        assert_eq!(lng[0].id().as_str(), "R002");
    }

    #[tokio::test]
    async fn test_compare_requires_baseline() {
        let service = service();

        let err = service.compare().await.unwrap_err();
        assert!(matches!(err, ServiceError::NoBaseline));
    }

    #[tokio::test]
    async fn test_compare_after_baseline() {
        let service = service();
        service.set_baseline(&RouteId::new("R001")).await.unwrap();

        let report = service.compare().await.unwrap();
        assert_eq!(report.baseline.id().as_str(), "R001");
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.target_intensity, TARGET_INTENSITY_2025);
        assert_eq!(report.compliant_count(), 1);
    }

    #[tokio::test]
    async fn test_custom_target() {
        let service = service().with_target_intensity(95.0).unwrap();
        service.set_baseline(&RouteId::new("R001")).await.unwrap();

        let report = service.compare().await.unwrap();
        assert!(report.baseline_compliant);
        assert_eq!(report.compliant_count(), 2);
    }

    #[test]
    fn test_invalid_target_rejected() {
        for bad in [f64::NAN, f64::INFINITY, 0.0, -89.0] {
            let err = service().with_target_intensity(bad).err().unwrap();
            assert!(matches!(err, ServiceError::InvalidTarget(_)), "{}", bad);
        }
    }

    #[tokio::test]
    async fn test_unknown_baseline_is_rejected() {
        let service = service();

        let err = service
            .set_baseline(&RouteId::new("R404"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repository(RepositoryError::NotFound { .. })
        ));
        assert_eq!(err.to_string(), "Route not found: R404");
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let service = RouteService::new(BrokenRepo);

        assert!(service.list_routes(RouteFilters::new()).await.is_err());
        assert!(service.set_baseline(&RouteId::new("R001")).await.is_err());
        assert!(matches!(
            service.compare().await,
            Err(ServiceError::Repository(RepositoryError::Persistence { .. }))
        ));
    }
}
