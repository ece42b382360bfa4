//! RouteComparison - The baseline and the routes measured against it

use super::route::Route;

/// Pairing returned by the repository port
///
/// `baseline` is `None` until a baseline has been chosen. `comparison`
/// never contains the baseline route itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteComparison {
    pub baseline: Option<Route>,
    pub comparison: Vec<Route>,
}

impl RouteComparison {
    /// Split a route list into baseline and the rest, keeping order
    ///
    /// The first route flagged as baseline wins; any later flagged
    /// route is treated as a comparison route.
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        let mut baseline = None;
        let mut comparison = Vec::new();

        for route in routes {
            if baseline.is_none() && route.is_baseline() {
                baseline = Some(route);
            } else {
                comparison.push(route);
            }
        }

        Self {
            baseline,
            comparison,
        }
    }

    pub fn has_baseline(&self) -> bool {
        self.baseline.is_some()
    }
}
