//! Door placement along a wall and door-to-door conflict checks.

use crate::walls::{closest_point_on_line_segment, wall_angle};
use labplan_core::{Door, Point};
use serde::{Deserialize, Serialize};

/// Bounds on how close to a wall's ends a door may sit, as fractions of the
/// wall length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorConfig {
    pub min_position: f64,
    pub max_position: f64,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            min_position: 0.1,
            max_position: 0.9,
        }
    }
}

/// Where a click on a wall puts a door.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorPlacement {
    /// Click projected onto the wall (before clamping `wall_position`).
    pub position: Point,
    pub wall_position: f64,
    /// Degrees, matching the wall direction.
    pub rotation: f64,
}

/// Places a door on `wall` at the click, keeping it out of the outer 10% at
/// each end.
pub fn find_optimal_door_position(click: Point, wall: (Point, Point)) -> DoorPlacement {
    find_optimal_door_position_with(click, wall, &DoorConfig::default())
}

pub fn find_optimal_door_position_with(
    click: Point,
    wall: (Point, Point),
    config: &DoorConfig,
) -> DoorPlacement {
    let (start, end) = wall;
    let position = closest_point_on_line_segment(click, start, end);
    let wall_length = start.distance_to(&end);

    let raw = if wall_length == 0.0 {
        0.0
    } else {
        start.distance_to(&position) / wall_length
    };

    DoorPlacement {
        position,
        wall_position: raw.clamp(config.min_position, config.max_position),
        rotation: wall_angle(start, end),
    }
}

/// True when `new_door` overlaps any door on the same wall.
///
/// The position delta is normalized while the widths are not; the two are
/// compared directly.
pub fn check_door_conflict(new_door: &Door, existing_doors: &[Door], door_width: f64) -> bool {
    find_door_conflict(new_door, existing_doors, door_width).is_some()
}

/// Like [`check_door_conflict`], returning the first conflicting door.
pub fn find_door_conflict<'a>(
    new_door: &Door,
    existing_doors: &'a [Door],
    door_width: f64,
) -> Option<&'a Door> {
    existing_doors.iter().find(|existing| {
        existing.wall_segment_index == new_door.wall_segment_index
            && (existing.wall_position - new_door.wall_position).abs()
                < (door_width + existing.width) / 2.0
    })
}
