//! # LabPlan Floor Plan
//!
//! Geometry engine behind the interactive room editor. Every function in the
//! geometry modules is a pure computation over snapshots: callers pass the
//! room polygon, walls, products and doors in, and get positions, booleans
//! and guides back. Nothing here throws; degenerate input produces a neutral
//! result (`false`, `None`, the unmodified position, or an empty list).
//!
//! ## Components
//!
//! - **Containment**: point-in-polygon and whole-product-in-room tests
//! - **Walls**: closest point on a segment, nearest room edge, wall angle
//! - **Doors**: door placement along a wall and conflict checks
//! - **Snapping**: edge and grid snapping for dragged products
//! - **Guides**: alignment guides shown while dragging
//!
//! ## Document layer
//!
//! ```text
//! FloorPlan (room, walls, products, doors)
//!   ├── DoorTool   (idle -> awaiting click -> placed / rejected)
//!   └── DragSession (one SnapResult + guides per pointer move)
//! ```
//!
//! The document layer is the only place where state changes. It calls into
//! the geometry modules and commits their results.
//!
//! ## Usage
//!
//! ```rust
//! use labplan_floorplan::{calculate_snapping, Dimensions, PlacedProduct, Point, SnapType};
//!
//! let size = Dimensions::new(100.0, 50.0, 90.0);
//! let a = PlacedProduct::new("A", Point::new(0.0, 0.0), size).with_id("a");
//! let b = PlacedProduct::new("B", Point::new(300.0, 0.0), size).with_id("b");
//!
//! let result = calculate_snapping(&b, Point::new(102.0, 0.0), &[a], 1.0, true);
//! assert_eq!(result.snap_type, SnapType::Edge);
//! assert_eq!(result.position, Point::new(100.0, 0.0));
//! ```

pub mod containment;
pub mod door_tool;
pub mod doors;
pub mod drag;
pub mod floor_plan;
pub mod guides;
pub mod snapping;
pub mod walls;

pub use labplan_core::{
    Dimensions, Door, Error, PlacedProduct, Point, Polygon, Result, WallSegment, WallType,
};

pub use containment::{is_point_in_polygon, is_product_within_room, rotated_rectangle_corners};
pub use door_tool::{
    DoorRejection, DoorTool, DoorToolOutcome, DoorToolState, DEFAULT_DOOR_WIDTH,
    DEFAULT_PICK_DISTANCE,
};
pub use doors::{
    check_door_conflict, find_door_conflict, find_optimal_door_position,
    find_optimal_door_position_with, DoorConfig, DoorPlacement,
};
pub use drag::{DragFrame, DragSession};
pub use floor_plan::FloorPlan;
pub use guides::{generate_snap_guides, generate_snap_guides_with, GuideOrientation, SnapGuide};
pub use snapping::{
    calculate_snapping, calculate_snapping_with, check_edge_snapping, check_edge_snapping_with,
    check_grid_snapping, check_grid_snapping_with, SnapConfig, SnapResult, SnapType, GRID_SIZE,
    GUIDE_OVERHANG, SNAP_THRESHOLD,
};
pub use walls::{
    closest_point_on_line_segment, find_closest_interior_wall, find_closest_wall_segment,
    wall_angle, ClosestInteriorWall, ClosestWall,
};
