//! Unit conversion utilities
//!
//! Physical product measurements are in millimetres; the floor-plan editor
//! works in canvas units. A [`Scale`] is the number of canvas units per
//! millimetre, the same factor the geometry engine receives as `scale`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canvas units per millimetre.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scale(pub f64);

impl Scale {
    /// One canvas unit per millimetre.
    pub const IDENTITY: Scale = Scale(1.0);

    pub fn new(canvas_per_mm: f64) -> Self {
        Self(canvas_per_mm)
    }

    /// Builds a scale from "how many millimetres one canvas unit represents".
    ///
    /// Non-positive or non-finite input yields [`Scale::IDENTITY`].
    pub fn from_mm_per_unit(mm_per_unit: f64) -> Self {
        if mm_per_unit.is_finite() && mm_per_unit > 0.0 {
            Self(1.0 / mm_per_unit)
        } else {
            Self::IDENTITY
        }
    }

    pub fn factor(&self) -> f64 {
        self.0
    }

    pub fn mm_to_canvas(&self, mm: f64) -> f64 {
        mm * self.0
    }

    /// Inverse of [`Scale::mm_to_canvas`]. A zero scale maps everything to zero.
    pub fn canvas_to_mm(&self, canvas: f64) -> f64 {
        if self.0 == 0.0 {
            0.0
        } else {
            canvas / self.0
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<f64> for Scale {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} px/mm", self.0)
    }
}
