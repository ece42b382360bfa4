//! Voyage application wiring: configuration, commands and output.

pub mod commands;
pub mod config;
pub mod render;
