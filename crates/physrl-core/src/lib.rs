//! PhysRL Core - cart-pole state and discretization wire types
//!
//! This crate provides the types shared between the discretization client
//! and the front-ends that consume it.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod state;
pub mod types;

pub use error::{CoreError, Result};
pub use state::{Dimension, StateVector, DEFAULT_N_BINS, N_BINS_HINT, STATE_DIM};
pub use types::*;
