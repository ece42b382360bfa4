//! Compliance - Measuring routes against the baseline and the target
//!
//! 1. Percent difference: how much more (or less) carbon-intense a route
//!    is than the baseline.
//! 2. Compliance: whether the route's intensity is at or below the target.
//!
//! This is pure domain logic - no I/O, no async, no external dependencies.

use crate::model::comparison::RouteComparison;
use crate::model::route::Route;

/// 2025 GHG intensity target in gCO2e/MJ (2% below the 91.16 reference)
pub const TARGET_INTENSITY_2025: f64 = 89.3368;

/// Percent difference of `comparison` relative to `baseline`
///
/// `((comparison / baseline) - 1) * 100`. Positive means the comparison
/// route is more carbon-intense than the baseline.
/// Returns `None` when the baseline intensity is zero, negative or not finite.
pub fn percent_diff(baseline: f64, comparison: f64) -> Option<f64> {
    if !baseline.is_finite() || !comparison.is_finite() || baseline <= 0.0 {
        return None;
    }
    Some(((comparison / baseline) - 1.0) * 100.0)
}

/// A route is compliant when its intensity does not exceed the target
pub fn is_compliant(ghg_intensity: f64, target: f64) -> bool {
    ghg_intensity <= target
}

/// One comparison route, measured against the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub route: Route,
    /// `None` when the baseline intensity cannot be divided by
    pub percent_diff: Option<f64>,
    pub compliant: bool,
}

/// Baseline plus every comparison route with its verdict
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub baseline: Route,
    pub baseline_compliant: bool,
    pub rows: Vec<ComparisonRow>,
    pub target_intensity: f64,
}

impl ComparisonReport {
    /// Build a report from the repository pairing
    ///
    /// Returns `None` when no baseline has been chosen yet.
    pub fn build(pairing: RouteComparison, target_intensity: f64) -> Option<Self> {
        let baseline = pairing.baseline?;
        let base = baseline.ghg_intensity();

        let rows = pairing
            .comparison
            .into_iter()
            .map(|route| ComparisonRow {
                percent_diff: percent_diff(base, route.ghg_intensity()),
                compliant: is_compliant(route.ghg_intensity(), target_intensity),
                route,
            })
            .collect();

        Some(Self {
            baseline_compliant: is_compliant(base, target_intensity),
            baseline,
            rows,
            target_intensity,
        })
    }

    /// Number of comparison routes at or below the target
    pub fn compliant_count(&self) -> usize {
        self.rows.iter().filter(|r| r.compliant).count()
    }
}
