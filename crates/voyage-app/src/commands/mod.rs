//! CLI Commands

pub mod routes;

pub use routes::RoutesCommand;
