//! Cart-pole state vector and its dimensions

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, Result};

/// Number of components in a cart-pole state
pub const STATE_DIM: usize = 4;

/// Bin count used when the caller does not pick one
pub const DEFAULT_N_BINS: i64 = 20;

/// Suggested bin count range for input forms (not enforced)
pub const N_BINS_HINT: RangeInclusive<i64> = 2..=100;

/// One axis of the cart-pole state, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Position,
    Velocity,
    Angle,
    AngularVelocity,
}

impl Dimension {
    /// All dimensions in the order they appear in a [`StateVector`]
    pub const ALL: [Dimension; STATE_DIM] = [
        Dimension::Position,
        Dimension::Velocity,
        Dimension::Angle,
        Dimension::AngularVelocity,
    ];

    /// Position of this dimension within a state vector
    pub fn index(self) -> usize {
        match self {
            Dimension::Position => 0,
            Dimension::Velocity => 1,
            Dimension::Angle => 2,
            Dimension::AngularVelocity => 3,
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Position => "Cart position",
            Dimension::Velocity => "Cart velocity",
            Dimension::Angle => "Pole angle",
            Dimension::AngularVelocity => "Pole angular velocity",
        }
    }

    /// Query parameter name used by `GET /api/discretize`
    pub fn query_key(self) -> &'static str {
        match self {
            Dimension::Position => "position",
            Dimension::Velocity => "velocity",
            Dimension::Angle => "angle",
            Dimension::AngularVelocity => "angular_velocity",
        }
    }

    /// Display-only range hint `(low, high)`.
    ///
    /// The client never clamps or rejects values outside of it.
    pub fn range_hint(self) -> (f64, f64) {
        match self {
            Dimension::Position => (-4.8, 4.8),
            Dimension::Velocity | Dimension::AngularVelocity => (-3.0, 3.0),
            Dimension::Angle => (-0.418, 0.418),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Continuous cart-pole state: `[position, velocity, angle, angular_velocity]`.
///
/// Components may be NaN or infinite; they are forwarded as-is. On the wire
/// non-finite values become JSON `null`, and `null` decodes back to NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateVector(pub [f64; STATE_DIM]);

impl StateVector {
    pub fn new(position: f64, velocity: f64, angle: f64, angular_velocity: f64) -> Self {
        Self([position, velocity, angle, angular_velocity])
    }

    pub fn position(&self) -> f64 {
        self.0[0]
    }

    pub fn velocity(&self) -> f64 {
        self.0[1]
    }

    pub fn angle(&self) -> f64 {
        self.0[2]
    }

    pub fn angular_velocity(&self) -> f64 {
        self.0[3]
    }

    pub fn get(&self, dim: Dimension) -> f64 {
        self.0[dim.index()]
    }

    pub fn as_array(&self) -> &[f64; STATE_DIM] {
        &self.0
    }

    /// True when every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl From<[f64; STATE_DIM]> for StateVector {
    fn from(values: [f64; STATE_DIM]) -> Self {
        Self(values)
    }
}

impl TryFrom<&[f64]> for StateVector {
    type Error = CoreError;

    fn try_from(values: &[f64]) -> Result<Self> {
        let values: [f64; STATE_DIM] = values.try_into().map_err(|_| {
            CoreError::InvalidState(format!(
                "expected {STATE_DIM} components, got {}",
                values.len()
            ))
        })?;
        Ok(Self(values))
    }
}

impl Serialize for StateVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // serde_json writes non-finite floats as null
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StateVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = <[Option<f64>; STATE_DIM]>::deserialize(deserializer)?;
        Ok(Self(raw.map(|v| v.unwrap_or(f64::NAN))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_order_matches_indices() {
        for (i, dim) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dim.index(), i);
        }
    }

    #[test]
    fn test_accessors() {
        let state = StateVector::new(1.0, 2.0, 0.1, -0.5);
        assert_eq!(state.position(), 1.0);
        assert_eq!(state.velocity(), 2.0);
        assert_eq!(state.angle(), 0.1);
        assert_eq!(state.angular_velocity(), -0.5);
        assert_eq!(state.get(Dimension::Angle), 0.1);
    }

    #[test]
    fn test_try_from_wrong_length() {
        let err = StateVector::try_from(&[0.0, 1.0, 2.0][..]).unwrap_err();
        assert!(err.to_string().contains("expected 4 components, got 3"));
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let state = StateVector::new(f64::NAN, 0.0, 0.0, 0.0);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "[null,0.0,0.0,0.0]");
        assert!(!state.is_finite());
    }

    #[test]
    fn test_null_deserializes_as_nan() {
        let state: StateVector = serde_json::from_str("[null, 1.5, 0, -2]").unwrap();
        assert!(state.position().is_nan());
        assert_eq!(state.velocity(), 1.5);
        assert_eq!(state.angular_velocity(), -2.0);
    }

    #[test]
    fn test_angle_hint() {
        assert_eq!(Dimension::Angle.range_hint(), (-0.418, 0.418));
        assert_eq!(Dimension::AngularVelocity.query_key(), "angular_velocity");
    }
}
