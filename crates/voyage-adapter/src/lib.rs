//! # Voyage Adapter Layer
//!
//! Storage integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - `RouteRepositoryPort` implementations (memory, JSON file)
//! - `record` - On-disk route format
//! - `seed` - Default route data set

pub mod error;
pub mod record;
pub mod repository;
pub mod seed;

pub use error::StorageError;
pub use repository::in_memory::InMemoryRouteRepository;
pub use repository::json_file::JsonFileRouteRepository;
