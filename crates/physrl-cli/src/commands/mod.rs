//! CLI command modules

pub mod config;
pub mod discretize;
pub mod health;
