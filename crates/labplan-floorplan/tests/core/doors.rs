use labplan_floorplan::{check_door_conflict, find_optimal_door_position, Door, Point};

#[test]
fn test_door_near_corner_is_pushed_inwards() {
    let wall = (Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    let placement = find_optimal_door_position(Point::new(5.0, 0.0), wall);
    assert_eq!(placement.wall_position, 0.1);
    assert_eq!(placement.rotation, 0.0);
}

#[test]
fn test_door_on_reversed_wall() {
    let placement = find_optimal_door_position(
        Point::new(30.0, 4.0),
        (Point::new(100.0, 0.0), Point::new(0.0, 0.0)),
    );
    assert!((placement.wall_position - 0.7).abs() < 1e-12);
    assert!((placement.rotation.abs() - 180.0).abs() < 1e-9);
}

#[test]
fn test_short_wall_still_clamps() {
    let wall = (Point::new(0.0, 0.0), Point::new(4.0, 0.0));
    let placement = find_optimal_door_position(Point::new(0.0, 0.0), wall);
    assert_eq!(placement.wall_position, 0.1);
}

#[test]
fn test_conflict_is_symmetric_for_scenario_doors() {
    let a = Door::new(0, 0.3, 0.0, 0.2);
    let b = Door::new(0, 0.45, 0.0, 0.1);
    assert_eq!(
        check_door_conflict(&a, std::slice::from_ref(&b), a.width),
        check_door_conflict(&b, std::slice::from_ref(&a), b.width)
    );
}

#[test]
fn test_conflict_scans_all_doors() {
    let existing = vec![
        Door::new(1, 0.5, 0.0, 0.1),
        Door::new(2, 0.8, 0.0, 0.1),
        Door::new(2, 0.2, 0.0, 0.1),
    ];
    assert!(check_door_conflict(&Door::new(2, 0.25, 0.0, 0.1), &existing, 0.1));
    assert!(!check_door_conflict(&Door::new(3, 0.25, 0.0, 0.1), &existing, 0.1));
}
