//! Persistence Adapters - Repository implementations
//!
//! These implement `RouteRepositoryPort` from voyage-domain.

pub mod in_memory;
pub mod json_file;

use std::collections::HashSet;

use tracing::warn;
use voyage_domain::{RepositoryError, Route, RouteId};

use crate::error::StorageError;

/// Check ids are unique and keep at most one baseline
///
/// When several routes arrive flagged, the first keeps the flag.
pub(crate) fn prepare_routes(mut routes: Vec<Route>) -> Result<Vec<Route>, StorageError> {
    let mut seen = HashSet::new();
    let mut baseline_seen = false;

    for route in routes.iter_mut() {
        if !seen.insert(route.id().clone()) {
            return Err(StorageError::DuplicateRoute(route.id().to_string()));
        }

        if route.is_baseline() {
            if baseline_seen {
                warn!(route_id = %route.id(), "Dropping extra baseline flag");
                route.clear_baseline();
            }
            baseline_seen = true;
        }
    }

    Ok(routes)
}

/// Move the baseline flag onto `route_id`
///
/// Leaves `routes` untouched when the id is unknown.
pub(crate) fn apply_baseline(routes: &mut [Route], route_id: &RouteId) -> Result<(), RepositoryError> {
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
