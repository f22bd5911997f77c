//! Door tool: turns a click near the room boundary into a committed door.
//!
//! ```text
//! Idle --select()--> AwaitingClick --click()--> Idle
//!                                     ├── Placed(door)   committed to the plan
//!                                     └── Rejected(..)   plan untouched
//! ```

use crate::doors::find_optimal_door_position_with;
use crate::floor_plan::FloorPlan;
use crate::walls::find_closest_wall_segment;
use labplan_core::{Door, Error, Point};
use tracing::debug;

/// Default door width in canvas units.
pub const DEFAULT_DOOR_WIDTH: f64 = 90.0;

/// Default maximum distance between a click and the wall it picks.
pub const DEFAULT_PICK_DISTANCE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorToolState {
    #[default]
    Idle,
    AwaitingClick,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DoorRejection {
    /// Overlaps the door with this id on the same wall.
    Conflict { existing_id: String },
    /// No room edge within pick distance (or no room at all).
    NoWallInRange,
    /// The picked edge is not part of the room.
    UnknownWall { index: usize },
    /// The plan refused the door for another reason.
    Refused(Error),
}

impl DoorRejection {
    fn from_error(err: Error, wall_index: usize) -> Self {
        match err {
            Error::DoorConflict { existing_id, .. } => Self::Conflict { existing_id },
            Error::UnknownWall(_) => Self::UnknownWall { index: wall_index },
            other => Self::Refused(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DoorToolOutcome {
    Placed(Door),
    Rejected(DoorRejection),
    /// The tool was not armed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct DoorTool {
    state: DoorToolState,
    door_width: f64,
    pick_distance: f64,
}

impl Default for DoorTool {
    fn default() -> Self {
        Self::new(DEFAULT_DOOR_WIDTH, DEFAULT_PICK_DISTANCE)
    }
}

impl DoorTool {
    pub fn new(door_width: f64, pick_distance: f64) -> Self {
        Self {
            state: DoorToolState::Idle,
            door_width,
            pick_distance,
        }
    }

    pub fn state(&self) -> DoorToolState {
        self.state
    }

    pub fn door_width(&self) -> f64 {
        self.door_width
    }

    /// Arms the tool for the next click.
    pub fn select(&mut self) {
        self.state = DoorToolState::AwaitingClick;
    }

    pub fn cancel(&mut self) {
        self.state = DoorToolState::Idle;
    }

    /// Handles a click, committing the door to `plan` on success.
    ///
    /// The tool returns to `Idle` after every click, placed or not.
    pub fn click(&mut self, point: Point, plan: &mut FloorPlan) -> DoorToolOutcome {
        if self.state != DoorToolState::AwaitingClick {
            return DoorToolOutcome::Ignored;
        }
        self.state = DoorToolState::Idle;

        let Some(wall) = find_closest_wall_segment(point, plan.room())
            .filter(|wall| wall.distance <= self.pick_distance)
        else {
            debug!(x = point.x, y = point.y, "door click not near a wall");
            return DoorToolOutcome::Rejected(DoorRejection::NoWallInRange);
        };

        let placement = find_optimal_door_position_with(point, wall.segment, plan.door_config());
        let door = Door::new(
            wall.index,
            placement.wall_position,
            placement.rotation,
            self.door_width,
        );

        match plan.add_door(door.clone()) {
            Ok(()) => DoorToolOutcome::Placed(door),
            Err(err) => {
                debug!(wall = wall.index, %err, "door rejected");
                DoorToolOutcome::Rejected(DoorRejection::from_error(err, wall.index))
            }
        }
    }
}
