//! Domain Services - Stateless rules over domain models

pub mod compliance;
