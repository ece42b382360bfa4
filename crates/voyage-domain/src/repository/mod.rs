//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the domain needs from storage,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer              │  Adapter Layer
//! ──────────────────────────┼────────────────────────────
//! trait RouteRepositoryPort │  InMemoryRouteRepository
//!   fn find_all()           │  JsonFileRouteRepository
//!   fn set_baseline()       │
//!   fn get_comparison()     │
//! ```

pub mod route_repository;
