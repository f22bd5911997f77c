//! Floor-plan document: the room, its interior walls, placed products and doors.
//!
//! `FloorPlan` is where edits are committed. It runs the geometry functions on
//! its own snapshot and only mutates when the result is acceptable, so a
//! refused edit leaves the document untouched.

use crate::containment::is_product_within_room;
use crate::doors::{find_door_conflict, DoorConfig};
use crate::snapping::{calculate_snapping_with, SnapConfig, SnapResult};
use crate::walls::find_closest_interior_wall;
use labplan_core::{Door, Error, PlacedProduct, Point, Polygon, Result, WallSegment};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    room: Polygon,
    walls: Vec<WallSegment>,
    products: Vec<PlacedProduct>,
    doors: Vec<Door>,
    /// Canvas units per millimetre.
    scale: f64,
    #[serde(default)]
    snap_config: SnapConfig,
    #[serde(default)]
    door_config: DoorConfig,
}

impl FloorPlan {
    pub fn new(room: Polygon, scale: f64) -> Self {
        Self {
            room,
            walls: Vec::new(),
            products: Vec::new(),
            doors: Vec::new(),
            scale,
            snap_config: SnapConfig::default(),
            door_config: DoorConfig::default(),
        }
    }

    pub fn with_snap_config(mut self, config: SnapConfig) -> Self {
        self.snap_config = config;
        self
    }

    pub fn with_door_config(mut self, config: DoorConfig) -> Self {
        self.door_config = config;
        self
    }

    pub fn room(&self) -> &Polygon {
        &self.room
    }

    pub fn walls(&self) -> &[WallSegment] {
        &self.walls
    }

    pub fn products(&self) -> &[PlacedProduct] {
        &self.products
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn snap_config(&self) -> &SnapConfig {
        &self.snap_config
    }

    pub fn door_config(&self) -> &DoorConfig {
        &self.door_config
    }

    pub fn product(&self, id: &str) -> Option<&PlacedProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Replaces the room boundary.
    ///
    /// Doors are anchored by edge index, so they are dropped when the new room
    /// has a different number of edges.
    pub fn set_room(&mut self, room: Polygon) {
        if room.len() != self.room.len() && !self.doors.is_empty() {
            debug!(
                dropped = self.doors.len(),
                "room edge count changed, removing doors"
            );
            self.doors.clear();
        }
        self.room = room;
    }

    /// Drops a product onto the plan. Refused when it would sit outside the room.
    pub fn add_product(&mut self, product: PlacedProduct) -> Result<()> {
        if !is_product_within_room(&product, &self.room, self.scale) {
            debug!(id = %product.id, "product outside room, not added");
            return Err(Error::ProductOutsideRoom { id: product.id });
        }
        self.products.push(product);
        Ok(())
    }

    /// Turns grid snapping on or off for later moves and drag sessions.
    pub fn set_grid_snap(&mut self, enabled: bool) {
        self.snap_config.enable_grid_snap = enabled;
    }

    /// Snaps the product towards `new_position` and commits the snapped spot.
    ///
    /// Grid snapping follows [`SnapConfig::enable_grid_snap`].
    pub fn move_product(&mut self, id: &str, new_position: Point) -> Result<SnapResult> {
        let dragged = self
            .product(id)
            .ok_or_else(|| Error::UnknownProduct(id.to_string()))?;
        let snap = calculate_snapping_with(
            dragged,
            new_position,
            &self.products,
            self.scale,
            self.snap_config.enable_grid_snap,
            &self.snap_config,
        );
        self.place_product(id, snap.position)?;
        Ok(snap)
    }

    /// Moves a product to exactly `position`, without snapping.
    pub fn place_product(&mut self, id: &str, position: Point) -> Result<()> {
        self.update_product(id, |p| p.position = position)
    }

    /// Sets the rotation in degrees, normalized to `[0, 360)`.
    pub fn rotate_product(&mut self, id: &str, rotation: f64) -> Result<()> {
        let rotation = rotation.rem_euclid(360.0);
        self.update_product(id, |p| p.rotation = rotation)
    }

    fn update_product(&mut self, id: &str, edit: impl FnOnce(&mut PlacedProduct)) -> Result<()> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::UnknownProduct(id.to_string()))?;

        let mut candidate = self.products[index].clone();
        edit(&mut candidate);

        if !is_product_within_room(&candidate, &self.room, self.scale) {
            debug!(id, "edit would move product outside room, rejected");
            return Err(Error::ProductOutsideRoom { id: id.to_string() });
        }

        self.products[index] = candidate;
        Ok(())
    }

    pub fn remove_product(&mut self, id: &str) -> Result<PlacedProduct> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::UnknownProduct(id.to_string()))?;
        Ok(self.products.remove(index))
    }

    /// Products with at least one footprint corner outside the room.
    pub fn products_outside_room(&self) -> Vec<&PlacedProduct> {
        self.products
            .iter()
            .filter(|p| !is_product_within_room(p, &self.room, self.scale))
            .collect()
    }

    /// Adds an interior wall and returns its id.
    pub fn add_wall(&mut self, wall: WallSegment) -> String {
        let id = wall.id.clone();
        self.walls.push(wall);
        id
    }

    pub fn remove_wall(&mut self, id: &str) -> Result<WallSegment> {
        let index = self
            .walls
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| Error::UnknownWall(id.to_string()))?;
        Ok(self.walls.remove(index))
    }

    /// Eraser: removes the interior wall nearest to `point` if it is within
    /// `pick_distance`.
    pub fn erase_wall_at(&mut self, point: Point, pick_distance: f64) -> Option<WallSegment> {
        let index = find_closest_interior_wall(point, &self.walls)
            .filter(|hit| hit.distance <= pick_distance)
            .map(|hit| hit.index)?;
        Some(self.walls.remove(index))
    }

    /// Adds a door to a room edge. Refused on an unknown edge or an overlap.
    pub fn add_door(&mut self, door: Door) -> Result<()> {
        if self.room.edge(door.wall_segment_index).is_none() {
            return Err(Error::UnknownWall(door.wall_segment_index.to_string()));
        }

        if let Some(existing) = find_door_conflict(&door, &self.doors, door.width) {
            debug!(
                wall = door.wall_segment_index,
                existing = %existing.id,
                "door conflict, not added"
            );
            return Err(Error::DoorConflict {
                wall_segment_index: door.wall_segment_index,
                existing_id: existing.id.clone(),
            });
        }

        self.doors.push(door);
        Ok(())
    }

    pub fn remove_door(&mut self, id: &str) -> Result<Door> {
        let index = self
            .doors
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| Error::UnknownDoor(id.to_string()))?;
        Ok(self.doors.remove(index))
    }

    /// Canvas position of a door's anchor on its room edge.
    pub fn door_anchor(&self, door: &Door) -> Option<Point> {
        let (start, end) = self.room.edge(door.wall_segment_index)?;
        Some(start.lerp(&end, door.wall_position))
    }
}
