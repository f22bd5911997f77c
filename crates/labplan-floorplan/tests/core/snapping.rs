use labplan_floorplan::{
    calculate_snapping, calculate_snapping_with, check_grid_snapping, generate_snap_guides,
    Dimensions, GuideOrientation, PlacedProduct, Point, SnapConfig, SnapType,
};

fn cabinet(id: &str, x: f64, y: f64) -> PlacedProduct {
    PlacedProduct::new(id, Point::new(x, y), Dimensions::new(100.0, 50.0, 90.0)).with_id(id)
}

#[test]
fn test_edge_snap_scenario() {
    let a = cabinet("a", 0.0, 0.0);
    let b = cabinet("b", 400.0, 400.0);
    let result = calculate_snapping(&b, Point::new(102.0, 0.0), &[a.clone()], 1.0, true);
    assert_eq!(result.position, Point::new(100.0, 0.0));
    assert!(result.is_snapped);
    assert_eq!(result.snap_type, SnapType::Edge);
    assert_eq!(result.snap_target, Some(a.id));
}

#[test]
fn test_grid_snap_scenario() {
    let b = cabinet("b", 0.0, 0.0);
    let result = calculate_snapping(&b, Point::new(207.0, 301.0), &[], 1.0, true);
    assert_eq!(result.position, Point::new(200.0, 300.0));
    assert_eq!(result.snap_type, SnapType::Grid);
}

#[test]
fn test_edge_snap_beats_grid() {
    let a = cabinet("a", 0.0, 3.0);
    let b = cabinet("b", 400.0, 400.0);
    let result = calculate_snapping(&b, Point::new(109.0, 9.0), &[a], 1.0, true);
    assert_eq!(result.snap_type, SnapType::Edge);
    assert_eq!(result.position, Point::new(100.0, 3.0));
}

#[test]
fn test_grid_snap_idempotent() {
    let first = check_grid_snapping(Point::new(133.0, -47.0), 0.1);
    let second = check_grid_snapping(first.position, 0.1);
    assert_eq!(first.position, Point::new(140.0, -40.0));
    assert_eq!(second.position, first.position);
    assert!(second.is_snapped);
}

#[test]
fn test_custom_threshold_disables_far_snaps() {
    let config = SnapConfig {
        snap_threshold: 2.0,
        ..SnapConfig::default()
    };
    let a = cabinet("a", 0.0, 0.0);
    let b = cabinet("b", 400.0, 400.0);
    let result = calculate_snapping_with(&b, Point::new(105.0, 10.0), &[a], 1.0, true, &config);
    // Too far for any edge, and 5 and 10 away from the nearest grid lines.
    assert!(!result.is_snapped);
    assert_eq!(result.position, Point::new(105.0, 10.0));
}

#[test]
fn test_guides_show_all_alignments_while_snap_takes_first() {
    let a = cabinet("a", 0.0, 0.0);
    let c = cabinet("c", 600.0, 6.0);
    let b = cabinet("b", 400.0, 400.0);
    let others = [a, c];

    let result = calculate_snapping(&b, Point::new(104.0, 2.0), &others, 1.0, true);
    assert_eq!(result.snap_target.as_deref(), Some("a"));

    let guides = generate_snap_guides(&b, Point::new(104.0, 2.0), &others, 1.0);
    let horizontal: Vec<_> = guides
        .iter()
        .filter(|g| g.orientation == GuideOrientation::Horizontal)
        .map(|g| g.position)
        .collect();
    assert_eq!(horizontal, vec![0.0, 6.0]);
    assert_eq!(guides[0].start.x, -50.0);
    assert_eq!(guides[1].end.x, 750.0);
}
