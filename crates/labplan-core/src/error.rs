//! Error handling for LabPlan
//!
//! The geometry functions themselves are fail-soft and never return errors.
//! These types cover the document layer, where an edit can be refused:
//! - Door placement conflicts and missing walls
//! - Products that would leave the room
//! - References to entities that no longer exist
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Floor-plan document error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A door would overlap an existing door on the same wall
    #[error("Door conflicts with door {existing_id} on wall {wall_segment_index}")]
    DoorConflict {
        /// The room edge both doors sit on.
        wall_segment_index: usize,
        /// The id of the door already on that edge.
        existing_id: String,
    },

    /// Wall index or id does not exist
    #[error("Unknown wall: {0}")]
    UnknownWall(String),

    /// Product id does not exist
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Door id does not exist
    #[error("Unknown door: {0}")]
    UnknownDoor(String),

    /// The product's footprint would leave the room polygon
    #[error("Product {id} would be outside the room")]
    ProductOutsideRoom {
        /// The product that was refused.
        id: String,
    },
}

/// Result type alias for floor-plan operations.
pub type Result<T> = std::result::Result<T, Error>;
