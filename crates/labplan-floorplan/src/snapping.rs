//! Object snapping for dragged products.
//!
//! Products are treated as axis-aligned rectangles anchored at their top-left
//! `position`, `dimensions.length * scale` wide and `dimensions.width * scale`
//! tall. Rotation is ignored here.
//!
//! Priority, first match wins:
//! 1. Edge snapping against other products, in the order given
//! 2. Grid snapping, when enabled
//! 3. The unmodified position

use labplan_core::{PlacedProduct, Point};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Grid pitch in canvas units.
pub const GRID_SIZE: f64 = 20.0;

/// Maximum distance, in canvas units, at which a snap engages.
pub const SNAP_THRESHOLD: f64 = 15.0;

/// How far alignment guides extend past the outermost aligned product.
pub const GUIDE_OVERHANG: f64 = 50.0;

/// Snap tuning. The defaults are the canvas-fixed constants above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    pub grid_size: f64,
    pub snap_threshold: f64,
    pub guide_overhang: f64,
    /// Grid snapping for document edits and new drag sessions.
    pub enable_grid_snap: bool,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            snap_threshold: SNAP_THRESHOLD,
            guide_overhang: GUIDE_OVERHANG,
            enable_grid_snap: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapType {
    Grid,
    Edge,
    /// Reserved for the UI; no corner-to-corner snapping is performed.
    Corner,
    #[default]
    None,
}

/// Outcome of one snapping pass. Recomputed on every pointer move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapResult {
    pub position: Point,
    pub is_snapped: bool,
    pub snap_type: SnapType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_target: Option<String>,
}

impl SnapResult {
    /// The input position, not snapped.
    pub fn unsnapped(position: Point) -> Self {
        Self {
            position,
            is_snapped: false,
            snap_type: SnapType::None,
            snap_target: None,
        }
    }

    fn edge(position: Point, target: &PlacedProduct) -> Self {
        Self {
            position,
            is_snapped: true,
            snap_type: SnapType::Edge,
            snap_target: Some(target.id.clone()),
        }
    }
}

/// Edges of a product footprint in canvas space.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Footprint {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    pub(crate) fn at(product: &PlacedProduct, position: Point, scale: f64) -> Self {
        let (width, height) = product.footprint(scale);
        Self {
            left: position.x,
            top: position.y,
            right: position.x + width,
            bottom: position.y + height,
            width,
            height,
        }
    }
}

/// Snaps `new_position` for `dragged`, checking other products first and the
/// grid second.
pub fn calculate_snapping(
    dragged: &PlacedProduct,
    new_position: Point,
    existing: &[PlacedProduct],
    scale: f64,
    enable_grid_snap: bool,
) -> SnapResult {
    calculate_snapping_with(
        dragged,
        new_position,
        existing,
        scale,
        enable_grid_snap,
        &SnapConfig::default(),
    )
}

pub fn calculate_snapping_with(
    dragged: &PlacedProduct,
    new_position: Point,
    existing: &[PlacedProduct],
    scale: f64,
    enable_grid_snap: bool,
    config: &SnapConfig,
) -> SnapResult {
    // First object that yields any snap wins, even if a later one is closer.
    let edge_snap = existing
        .iter()
        .filter(|other| other.id != dragged.id)
        .map(|other| check_edge_snapping_with(dragged, new_position, other, scale, config))
        .find(|result| result.is_snapped);

    if let Some(result) = edge_snap {
        trace!(
            target_id = ?result.snap_target,
            x = result.position.x,
            y = result.position.y,
            "edge snap"
        );
        return result;
    }

    if enable_grid_snap {
        let result = check_grid_snapping_with(new_position, config);
        if result.is_snapped {
            trace!(x = result.position.x, y = result.position.y, "grid snap");
            return result;
        }
    }

    SnapResult::unsnapped(new_position)
}

/// Edge-to-edge snap of `dragged` (at `new_position`) against one target.
///
/// Horizontal pairing needs the tops aligned within the threshold, then
/// snaps dragged-left to target-right or dragged-right to target-left.
/// Vertical pairing needs the lefts aligned, then snaps dragged-top to
/// target-bottom or dragged-bottom to target-top. The snapped position also
/// takes the target's top (or left) so the pair lines up exactly.
pub fn check_edge_snapping(
    dragged: &PlacedProduct,
    new_position: Point,
    target: &PlacedProduct,
    scale: f64,
) -> SnapResult {
    check_edge_snapping_with(dragged, new_position, target, scale, &SnapConfig::default())
}

pub fn check_edge_snapping_with(
    dragged: &PlacedProduct,
    new_position: Point,
    target: &PlacedProduct,
    scale: f64,
    config: &SnapConfig,
) -> SnapResult {
    let d = Footprint::at(dragged, new_position, scale);
    let t = Footprint::at(target, target.position, scale);
    let near = |a: f64, b: f64| (a - b).abs() < config.snap_threshold;

    if near(d.top, t.top) {
        if near(d.left, t.right) {
            return SnapResult::edge(Point::new(t.right, t.top), target);
        }
        if near(d.right, t.left) {
            return SnapResult::edge(Point::new(t.left - d.width, t.top), target);
        }
    }

    if near(d.left, t.left) {
        if near(d.top, t.bottom) {
            return SnapResult::edge(Point::new(t.left, t.bottom), target);
        }
        if near(d.bottom, t.top) {
            return SnapResult::edge(Point::new(t.left, t.top - d.height), target);
        }
    }

    SnapResult::unsnapped(new_position)
}

/// Rounds each axis to the nearest grid line independently.
///
/// An axis only moves when it is within the threshold of its grid line, so
/// one axis may snap while the other does not. The grid is fixed in canvas
/// units, so `scale` does not change the result.
pub fn check_grid_snapping(position: Point, _scale: f64) -> SnapResult {
    check_grid_snapping_with(position, &SnapConfig::default())
}

pub fn check_grid_snapping_with(position: Point, config: &SnapConfig) -> SnapResult {
    if config.grid_size <= 0.0 {
        return SnapResult::unsnapped(position);
    }

    let snap_axis = |value: f64| {
        // Halves round towards +inf so -10 lands on 0, not -20.
        let line = (value / config.grid_size + 0.5).floor() * config.grid_size;
        ((value - line).abs() < config.snap_threshold).then_some(line)
    };

    let x = snap_axis(position.x);
    let y = snap_axis(position.y);

    if x.is_none() && y.is_none() {
        return SnapResult::unsnapped(position);
    }

    SnapResult {
        position: Point::new(x.unwrap_or(position.x), y.unwrap_or(position.y)),
        is_snapped: true,
        snap_type: SnapType::Grid,
        snap_target: None,
    }
}
