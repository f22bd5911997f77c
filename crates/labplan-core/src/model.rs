//! Floor-plan document entities: interior walls, placed products and doors.
//!
//! These are owned by the floor-plan document. The geometry engine only ever
//! sees them as borrowed snapshots.

use crate::geometry::Point;
use crate::units::Scale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Generates a fresh entity identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Structural role of an interior wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallType {
    #[default]
    Interior,
    Exterior,
    Partition,
    LoadBearing,
}

impl fmt::Display for WallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interior => write!(f, "interior"),
            Self::Exterior => write!(f, "exterior"),
            Self::Partition => write!(f, "partition"),
            Self::LoadBearing => write!(f, "load-bearing"),
        }
    }
}

/// An independently drawn wall, distinct from the room boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub id: String,
    pub start: Point,
    pub end: Point,
    pub thickness: f64,
    #[serde(rename = "type")]
    pub wall_type: WallType,
    pub color: String,
}

impl WallSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: new_id(),
            start,
            end,
            thickness: 10.0,
            wall_type: WallType::default(),
            color: "#6b7280".to_string(),
        }
    }

    pub fn with_type(mut self, wall_type: WallType) -> Self {
        self.wall_type = wall_type;
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Direction of the wall in degrees, `atan2(dy, dx)`.
    pub fn angle(&self) -> f64 {
        (self.end.y - self.start.y)
            .atan2(self.end.x - self.start.x)
            .to_degrees()
    }
}

/// Physical size of a catalog product, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

/// One instance of a catalog product dropped onto the floor plan.
///
/// `dimensions.length` runs along the canvas x axis and `dimensions.width`
/// along the canvas y axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedProduct {
    pub id: String,
    pub position: Point,
    /// Degrees, clockwise-positive on the y-down canvas.
    pub rotation: f64,
    pub dimensions: Dimensions,
    pub scale: f64,
    pub color: String,
    pub category: String,
    pub name: String,
}

impl PlacedProduct {
    pub fn new(name: impl Into<String>, position: Point, dimensions: Dimensions) -> Self {
        Self {
            id: new_id(),
            position,
            rotation: 0.0,
            dimensions,
            scale: 1.0,
            color: "#3b82f6".to_string(),
            category: String::new(),
            name: name.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Canvas `(width, height)` of the unrotated footprint at the given scale.
    pub fn footprint(&self, scale: f64) -> (f64, f64) {
        let scale = Scale::new(scale);
        (
            scale.mm_to_canvas(self.dimensions.length),
            scale.mm_to_canvas(self.dimensions.width),
        )
    }
}

/// A door anchored to one edge of the room boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub id: String,
    /// Index of the room edge the door sits on (edge `i` runs from point `i` to `i + 1`).
    pub wall_segment_index: usize,
    /// Normalized offset along the edge, 0 at its start and 1 at its end.
    pub wall_position: f64,
    pub rotation: f64,
    pub width: f64,
}

impl Door {
    pub fn new(wall_segment_index: usize, wall_position: f64, rotation: f64, width: f64) -> Self {
        Self {
            id: new_id(),
            wall_segment_index,
            wall_position,
            rotation,
            width,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
