//! PhysRL Client - HTTP adapter for the state discretization API
//!
//! Builds discretization requests, sends them to the configured backend and
//! surfaces either the parsed response or a plain-text error.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;

pub use client::{DiscretizeClient, DISCRETIZE_FAILED, HEALTH_FAILED};
pub use config::{ApiConfig, ClientConfig, API_URL_ENV};
pub use error::{ClientError, Result};
