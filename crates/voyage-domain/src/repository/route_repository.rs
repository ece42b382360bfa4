//! Route Repository - Abstract access to routes and the baseline
//!
//! This trait defines what operations the domain needs.
//! How they're implemented (file, memory, database) is not our concern here.

use core::future::Future;

use crate::model::comparison::RouteComparison;
use crate::model::filter::RouteFilters;
use crate::model::route::{Route, RouteId};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Route not found
    NotFound { id: String },
    /// Storage failed to read or persist
    Persistence { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { id } => {
                write!(f, "Route not found: {}", id)
            }
            RepositoryError::Persistence { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Route Repository Port
///
/// This is a PORT in hexagonal architecture.
/// The use-case layer depends on it; adapters provide implementations
/// chosen at wiring time.
///
/// Async is expressed with `impl Future + Send` so the domain stays free
/// of any runtime. Implementors write plain `async fn`s.
///
/// Contract every adapter must honour:
/// - `find_all` returns the routes matching ALL set filter fields, in
///   stable storage order. The empty filter set returns everything.
/// - At most one route is the baseline at any time.
/// - `set_baseline` on an unknown id fails with
///   [`RepositoryError::NotFound`] and leaves the baseline untouched.
/// - `get_comparison` never lists the baseline among the comparison routes.
pub trait RouteRepositoryPort: Send + Sync {
    /// List routes matching the filters
    fn find_all(
        &self,
        filters: RouteFilters,
    ) -> impl Future<Output = Result<Vec<Route>, RepositoryError>> + Send;

    /// Make the route the single baseline
    fn set_baseline(
        &self,
        route_id: &RouteId,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Current baseline (if any) and every other route
    fn get_comparison(
        &self,
    ) -> impl Future<Output = Result<RouteComparison, RepositoryError>> + Send;

    /// List every route
    fn list_all(&self) -> impl Future<Output = Result<Vec<Route>, RepositoryError>> + Send {
        self.find_all(RouteFilters::default())
    }
}
