//! Alignment guides drawn while a product is dragged.
//!
//! Guides are computed alongside, not from, the snap result: every product
//! whose top or left edge is within the threshold gets a guide, even though
//! snapping only ever acts on the first match.

use crate::snapping::{Footprint, SnapConfig};
use labplan_core::{PlacedProduct, Point};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideOrientation {
    /// A line of constant y (shared top edge).
    Horizontal,
    /// A line of constant x (shared left edge).
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapGuide {
    #[serde(rename = "type")]
    pub orientation: GuideOrientation,
    /// y for horizontal guides, x for vertical ones.
    pub position: f64,
    pub start: Point,
    pub end: Point,
}

pub fn generate_snap_guides(
    dragged: &PlacedProduct,
    position: Point,
    existing: &[PlacedProduct],
    scale: f64,
) -> Vec<SnapGuide> {
    generate_snap_guides_with(dragged, position, existing, scale, &SnapConfig::default())
}

/// One horizontal and/or one vertical guide per aligned product, in list order.
pub fn generate_snap_guides_with(
    dragged: &PlacedProduct,
    position: Point,
    existing: &[PlacedProduct],
    scale: f64,
    config: &SnapConfig,
) -> Vec<SnapGuide> {
    let d = Footprint::at(dragged, position, scale);
    let overhang = config.guide_overhang;
    let mut guides = Vec::new();

    for other in existing.iter().filter(|o| o.id != dragged.id) {
        let t = Footprint::at(other, other.position, scale);

        if (d.top - t.top).abs() < config.snap_threshold {
            guides.push(SnapGuide {
                orientation: GuideOrientation::Horizontal,
                position: t.top,
                start: Point::new(d.left.min(t.left) - overhang, t.top),
                end: Point::new(d.right.max(t.right) + overhang, t.top),
            });
        }

        if (d.left - t.left).abs() < config.snap_threshold {
            guides.push(SnapGuide {
                orientation: GuideOrientation::Vertical,
                position: t.left,
                start: Point::new(t.left, d.top.min(t.top) - overhang),
                end: Point::new(t.left, d.bottom.max(t.bottom) + overhang),
            });
        }
    }

    trace!(count = guides.len(), "snap guides");
    guides
}
