//! # Voyage Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//! it depends on the [`RouteRepositoryPort`](voyage_domain::RouteRepositoryPort)
//! and never on a concrete storage.

pub mod route_service;

pub use route_service::{RouteService, ServiceError};
pub use voyage_domain;
