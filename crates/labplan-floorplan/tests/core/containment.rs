use labplan_floorplan::{
    is_point_in_polygon, is_product_within_room, rotated_rectangle_corners, Dimensions,
    PlacedProduct, Point, Polygon,
};

fn square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]
}

#[test]
fn test_point_in_square() {
    assert!(is_point_in_polygon(Point::new(5.0, 5.0), &square()));
    assert!(!is_point_in_polygon(Point::new(15.0, 5.0), &square()));
}

#[test]
fn test_point_in_counter_clockwise_ring() {
    let mut ring = square();
    ring.reverse();
    assert!(is_point_in_polygon(Point::new(5.0, 5.0), &ring));
    assert!(!is_point_in_polygon(Point::new(-5.0, 5.0), &ring));
}

#[test]
fn test_zero_rotation_corners() {
    let corners = rotated_rectangle_corners(Point::new(50.0, 50.0), 20.0, 10.0, 0.0);
    assert_eq!(
        corners,
        [
            Point::new(40.0, 45.0),
            Point::new(60.0, 45.0),
            Point::new(60.0, 55.0),
            Point::new(40.0, 55.0),
        ]
    );
}

#[test]
fn test_half_turn_swaps_opposite_corners() {
    let corners = rotated_rectangle_corners(Point::new(0.0, 0.0), 20.0, 10.0, 180.0);
    assert!((corners[0].x - 10.0).abs() < 1e-9);
    assert!((corners[0].y - 5.0).abs() < 1e-9);
}

#[test]
fn test_product_in_l_shaped_lab() {
    // 10m x 8m lab with a 4m x 3m corner taken by a stairwell, at 0.05 px/mm.
    let room = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(300.0, 0.0),
        Point::new(300.0, 150.0),
        Point::new(500.0, 150.0),
        Point::new(500.0, 400.0),
        Point::new(0.0, 400.0),
    ]);
    let hood = PlacedProduct::new(
        "Fume hood",
        Point::new(20.0, 20.0),
        Dimensions::new(1800.0, 900.0, 2400.0),
    );
    assert!(is_product_within_room(&hood, &room, 0.05));

    let mut in_stairwell = hood.clone();
    in_stairwell.position = Point::new(320.0, 20.0);
    assert!(!is_product_within_room(&in_stairwell, &room, 0.05));

    // Straddling the notch corner: three corners inside, one in the cut-out.
    let mut straddling = hood.clone();
    straddling.position = Point::new(250.0, 120.0);
    assert!(!is_product_within_room(&straddling, &room, 0.05));
}

#[test]
fn test_corner_only_check_misses_concave_crossing() {
    // U-shaped room: a wide product bridging the gap keeps all four corners
    // inside the two arms while its middle crosses the empty notch.
    let room = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(200.0, 100.0),
        Point::new(200.0, 0.0),
        Point::new(300.0, 0.0),
        Point::new(300.0, 300.0),
        Point::new(0.0, 300.0),
    ]);
    let bridge = PlacedProduct::new(
        "Bridge",
        Point::new(50.0, 20.0),
        Dimensions::new(200.0, 40.0, 10.0),
    );
    assert!(is_product_within_room(&bridge, &room, 1.0));
}
