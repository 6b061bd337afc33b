//! Request and response types for the discretization API

use serde::{Deserialize, Serialize};

use crate::state::{Dimension, StateVector, DEFAULT_N_BINS, STATE_DIM};

fn default_n_bins() -> Option<i64> {
    Some(DEFAULT_N_BINS)
}

/// Body of `POST /api/discretize`.
///
/// `n_bins` is forwarded without range checks. `None` stands for a bin count
/// that could not be read from the input and is sent as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscretizeRequest {
    pub state: StateVector,
    #[serde(default = "default_n_bins")]
    pub n_bins: Option<i64>,
}

impl DiscretizeRequest {
    /// Request with the default bin count
    pub fn new(state: impl Into<StateVector>) -> Self {
        Self {
            state: state.into(),
            n_bins: Some(DEFAULT_N_BINS),
        }
    }

    pub fn with_bins(mut self, n_bins: i64) -> Self {
        self.n_bins = Some(n_bins);
        self
    }

    /// Set the bin count as parsed from free-form input
    pub fn with_parsed_bins(mut self, n_bins: Option<i64>) -> Self {
        self.n_bins = n_bins;
        self
    }

    /// Same logical request expressed as `GET /api/discretize` parameters
    pub fn to_query(&self) -> DiscretizeQuery {
        DiscretizeQuery {
            state: self.state,
            n_bins: self.n_bins,
        }
    }
}

/// Query parameters for `GET /api/discretize`
#[derive(Debug, Clone, PartialEq)]
pub struct DiscretizeQuery {
    pub state: StateVector,
    pub n_bins: Option<i64>,
}

impl DiscretizeQuery {
    pub fn new(state: StateVector, n_bins: Option<i64>) -> Self {
        Self { state, n_bins }
    }

    /// Encode as `(key, value)` pairs.
    ///
    /// Floats use their shortest display form, so `0.0` is sent as `0` and
    /// NaN as `NaN`. An unreadable bin count is sent as `NaN` too.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = Dimension::ALL
            .iter()
            .map(|dim| (dim.query_key(), self.state.get(*dim).to_string()))
            .collect();
        let n_bins = self
            .n_bins
            .map_or_else(|| f64::NAN.to_string(), |n| n.to_string());
        pairs.push(("n_bins", n_bins));
        pairs
    }
}

/// Response of both discretize endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscretizeResponse {
    pub success: bool,
    #[serde(default)]
    pub discretized: Vec<i64>,
    /// Bin count per dimension. Both arrays are signed: a zero bin count
    /// comes back as index `-1`.
    #[serde(default)]
    pub state_shape: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_state: Option<StateVector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DiscretizeResponse {
    /// Per-dimension `(dimension, bin index, bin count)` triples.
    ///
    /// Stops at the shorter of `discretized` and `state_shape`.
    pub fn bins(&self) -> impl Iterator<Item = (Dimension, i64, i64)> + '_ {
        Dimension::ALL
            .into_iter()
            .zip(self.discretized.iter().zip(self.state_shape.iter()))
            .map(|(dim, (&index, &count))| (dim, index, count))
    }

    /// True when both index and shape arrays carry one entry per dimension
    pub fn is_complete(&self) -> bool {
        self.discretized.len() == STATE_DIM && self.state_shape.len() == STATE_DIM
    }
}

/// Response of `GET /api`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
