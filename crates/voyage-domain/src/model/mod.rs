//! Domain Models - The vocabulary of route comparison
//!
//! These types name things the way operators talk about them:
//! a route, its vessel and fuel, the baseline it is measured against.

pub mod comparison;
pub mod filter;
pub mod route;
