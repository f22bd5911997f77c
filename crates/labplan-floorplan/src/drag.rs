//! Per-frame snapping for an interactive drag.
//!
//! A session snapshots the other products when the drag starts, then
//! produces one [`DragFrame`] per pointer move. Only the latest frame is kept;
//! committing applies that frame and nothing older.

use crate::floor_plan::FloorPlan;
use crate::guides::{generate_snap_guides_with, SnapGuide};
use crate::snapping::{calculate_snapping_with, SnapConfig, SnapResult};
use labplan_core::{Error, PlacedProduct, Point, Result};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct DragFrame {
    pub snap: SnapResult,
    pub guides: Vec<SnapGuide>,
}

#[derive(Debug, Clone)]
pub struct DragSession {
    dragged: PlacedProduct,
    others: Vec<PlacedProduct>,
    scale: f64,
    config: SnapConfig,
    /// Pointer position relative to the product's top-left corner at grab time.
    grab_offset: Point,
    last: Option<DragFrame>,
}

impl DragSession {
    /// Starts dragging product `id`, grabbed at `pointer`.
    ///
    /// Grid snapping starts from the plan's setting.
    pub fn begin(plan: &FloorPlan, id: &str, pointer: Point) -> Result<Self> {
        let dragged = plan
            .product(id)
            .cloned()
            .ok_or_else(|| Error::UnknownProduct(id.to_string()))?;
        let others = plan
            .products()
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();

        debug!(id, "drag started");
        Ok(Self {
            grab_offset: pointer - dragged.position,
            dragged,
            others,
            scale: plan.scale(),
            config: *plan.snap_config(),
            last: None,
        })
    }

    pub fn dragged_id(&self) -> &str {
        &self.dragged.id
    }

    /// Toggles grid snapping mid-drag (e.g. while a modifier key is held).
    pub fn set_grid_snap(&mut self, enabled: bool) {
        self.config.enable_grid_snap = enabled;
    }

    /// Computes the frame for a new pointer position, replacing the previous one.
    pub fn update(&mut self, pointer: Point) -> &DragFrame {
        let candidate = pointer - self.grab_offset;
        let snap = calculate_snapping_with(
            &self.dragged,
            candidate,
            &self.others,
            self.scale,
            self.config.enable_grid_snap,
            &self.config,
        );
        let guides = generate_snap_guides_with(
            &self.dragged,
            candidate,
            &self.others,
            self.scale,
            &self.config,
        );

        self.last.insert(DragFrame { snap, guides })
    }

    pub fn last_frame(&self) -> Option<&DragFrame> {
        self.last.as_ref()
    }

    /// Ends the drag and returns the final frame, if the pointer ever moved.
    pub fn finish(self) -> Option<DragFrame> {
        self.last
    }

    /// Ends the drag and writes the final snapped position to `plan`.
    ///
    /// Returns `Ok(None)` when the pointer never moved.
    pub fn commit(self, plan: &mut FloorPlan) -> Result<Option<SnapResult>> {
        let id = self.dragged.id.clone();
        let Some(frame) = self.finish() else {
            return Ok(None);
        };
        plan.place_product(&id, frame.snap.position)?;
        debug!(id = %id, snapped = frame.snap.is_snapped, "drag committed");
        Ok(Some(frame.snap))
    }
}
