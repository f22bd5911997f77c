use anyhow::Context;
use labplan::{init_logging, FloorPlan};
use std::path::PathBuf;
use tracing::{info, warn};

/// Checks a saved floor plan: products outside the room and overlapping doors.
///
/// Usage: `labplan <plan.json>`
fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut args = std::env::args_os().skip(1);
    let plan_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .context("usage: labplan <plan.json>")?;

    let content = std::fs::read_to_string(&plan_path)
        .with_context(|| format!("reading {}", plan_path.display()))?;
    let plan: FloorPlan = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", plan_path.display()))?;

    let report = labplan::check_plan(&plan);
    info!(
        products = plan.products().len(),
        doors = plan.doors().len(),
        walls = plan.walls().len(),
        "plan loaded"
    );

    for id in &report.products_outside_room {
        warn!(product = %id, "product extends outside the room");
    }
    for (door, other) in &report.door_conflicts {
        warn!(door = %door, conflicts_with = %other, "overlapping doors");
    }

    if report.is_clean() {
        println!("{}: ok", plan_path.display());
        Ok(())
    } else {
        anyhow::bail!(
            "{}: {} product(s) outside the room, {} door conflict(s)",
            plan_path.display(),
            report.products_outside_room.len(),
            report.door_conflicts.len()
        )
    }
}
