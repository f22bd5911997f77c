//! # LabPlan
//!
//! Floor-plan geometry engine for laboratory furniture layouts:
//! - Polygon containment for rooms and rotated products
//! - Nearest wall segment lookup
//! - Door placement along room edges with conflict detection
//! - Object snapping (edge and grid) with alignment guides
//!
//! ## Architecture
//!
//! LabPlan is organized as a workspace with multiple crates:
//!
//! 1. **labplan-core** - Points, polygons, units, the floor-plan data model, errors
//! 2. **labplan-floorplan** - Containment, walls, doors, snapping, guides, editing state
//! 3. **labplan-settings** - Planner configuration persisted as JSON or TOML
//! 4. **labplan** - This crate; re-exports the above and sets up logging

pub use labplan_core as types;
pub use labplan_floorplan as floorplan;
pub use labplan_settings as settings;

pub use labplan_core::{
    Dimensions, Door, Error, PlacedProduct, Point, Polygon, Result, Scale, WallSegment, WallType,
};

pub use labplan_floorplan::{
    calculate_snapping, check_door_conflict, find_closest_wall_segment,
    find_optimal_door_position, generate_snap_guides, is_point_in_polygon,
    is_product_within_room, DoorTool, DoorToolOutcome, DragFrame, DragSession, FloorPlan,
    SnapGuide, SnapResult, SnapType,
};

pub use labplan_settings::{PlannerSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Console output, `RUST_LOG` support, `info` when unset. Fails if a global
/// subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

/// Problems found in a loaded floor plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanReport {
    /// Ids of products with a footprint corner outside the room.
    pub products_outside_room: Vec<String>,
    /// `(door, earlier door)` id pairs that overlap on the same wall.
    pub door_conflicts: Vec<(String, String)>,
}

impl PlanReport {
    pub fn is_clean(&self) -> bool {
        self.products_outside_room.is_empty() && self.door_conflicts.is_empty()
    }
}

/// Re-checks a plan that was edited elsewhere (or by hand) against the
/// placement rules [`FloorPlan`] enforces on every edit.
pub fn check_plan(plan: &FloorPlan) -> PlanReport {
    let products_outside_room = plan
        .products_outside_room()
        .into_iter()
        .map(|p| p.id.clone())
        .collect();

    let doors = plan.doors();
    let door_conflicts = doors
        .iter()
        .enumerate()
        .filter_map(|(i, door)| {
            labplan_floorplan::find_door_conflict(door, &doors[..i], door.width)
                .map(|other| (door.id.clone(), other.id.clone()))
        })
        .collect();

    PlanReport {
        products_outside_room,
        door_conflicts,
    }
}
