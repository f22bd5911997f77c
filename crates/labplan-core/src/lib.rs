//! # LabPlan Core
//!
//! Core value types, unit conversion and error types shared by the LabPlan
//! floor-plan crates.
//!
//! Every type here is plain data: the geometry engine receives snapshots of
//! these values and hands new values back, it never owns them.

pub mod error;
pub mod geometry;
pub mod model;
pub mod units;

pub use error::{Error, Result};
pub use geometry::{Point, Polygon};
pub use model::{new_id, Dimensions, Door, PlacedProduct, WallSegment, WallType};
pub use units::Scale;
