use labplan_floorplan::{
    closest_point_on_line_segment, find_closest_interior_wall, find_closest_wall_segment,
    wall_angle, Point, Polygon, WallSegment, WallType,
};

#[test]
fn test_closest_point_scenario() {
    assert_eq!(
        closest_point_on_line_segment(
            Point::new(5.0, 5.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0)
        ),
        Point::new(5.0, 0.0)
    );
}

#[test]
fn test_closest_point_on_diagonal() {
    let p = closest_point_on_line_segment(
        Point::new(0.0, 10.0),
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
    );
    assert!((p.x - 5.0).abs() < 1e-12);
    assert!((p.y - 5.0).abs() < 1e-12);
}

#[test]
fn test_nearest_room_edge_in_irregular_room() {
    let room = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(200.0, 0.0),
        Point::new(260.0, 120.0),
        Point::new(0.0, 120.0),
    ]);
    let hit = find_closest_wall_segment(Point::new(235.0, 60.0), &room).unwrap();
    assert_eq!(hit.index, 1);
    assert_eq!(hit.segment, (Point::new(200.0, 0.0), Point::new(260.0, 120.0)));
    assert!(hit.distance < 15.0);
}

#[test]
fn test_two_point_room_has_edges() {
    let room = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
    let hit = find_closest_wall_segment(Point::new(50.0, 10.0), &room).unwrap();
    assert_eq!(hit.index, 0);
    assert_eq!(hit.distance, 10.0);
}

#[test]
fn test_nearest_interior_wall_ignores_type() {
    let walls = vec![
        WallSegment::new(Point::new(0.0, 50.0), Point::new(100.0, 50.0))
            .with_type(WallType::LoadBearing),
        WallSegment::new(Point::new(0.0, 58.0), Point::new(100.0, 58.0))
            .with_type(WallType::Partition),
    ];
    let hit = find_closest_interior_wall(Point::new(50.0, 56.0), &walls).unwrap();
    assert_eq!(hit.wall.wall_type, WallType::Partition);
    assert_eq!(hit.point, Point::new(50.0, 58.0));
}

#[test]
fn test_wall_angle_matches_segment_method() {
    let wall = WallSegment::new(Point::new(10.0, 10.0), Point::new(-20.0, 40.0));
    assert!((wall_angle(wall.start, wall.end) - wall.angle()).abs() < 1e-12);
    assert!((wall.angle() - 135.0).abs() < 1e-9);
}
