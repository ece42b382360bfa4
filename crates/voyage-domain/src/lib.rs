//! # Voyage Domain Layer
//!
//! Pure business logic for route emissions comparison.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Route entity, filters, comparison pairing     ││
//! │  │  repository/- RouteRepositoryPort (trait, no impls)         ││
//! │  │  service/   - Compliance & percent-difference rules         ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This crate has no runtime dependencies. Switching the storage from a
//! JSON file to a database only touches the adapter layer.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    comparison::RouteComparison,
    filter::RouteFilters,
    route::{FuelType, Route, RouteError, RouteId, VesselType},
};

pub use repository::route_repository::{RepositoryError, RouteRepositoryPort};

pub use service::compliance::{
    is_compliant, percent_diff, ComparisonReport, ComparisonRow, TARGET_INTENSITY_2025,
};
