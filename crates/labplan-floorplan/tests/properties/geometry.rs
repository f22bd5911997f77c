//! Property tests for the geometry invariants.

use labplan_floorplan::{
    check_door_conflict, check_grid_snapping, closest_point_on_line_segment, is_point_in_polygon,
    rotated_rectangle_corners, Door, Point, Polygon,
};
use proptest::prelude::*;

fn grid_point() -> impl Strategy<Value = Point> {
    (-100i32..100, -100i32..100).prop_map(|(x, y)| Point::new(x as f64, y as f64))
}

fn any_point() -> impl Strategy<Value = Point> {
    (-1.0e4f64..1.0e4, -1.0e4f64..1.0e4).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    // Vertices on integers and the query on half-integers keep every crossing
    // test away from floating-point ties.
    #[test]
    fn point_in_polygon_is_translation_invariant(
        polygon in prop::collection::vec(grid_point(), 3..8),
        (px, py) in (-100i32..100, -100i32..100),
        (dx, dy) in (-1000i32..1000, -1000i32..1000),
    ) {
        let point = Point::new(px as f64 + 0.5, py as f64 + 0.5);
        let (dx, dy) = (dx as f64, dy as f64);
        let polygon = Polygon::from(polygon);
        let moved = polygon.translate(dx, dy);

        prop_assert_eq!(
            is_point_in_polygon(point, &polygon),
            is_point_in_polygon(point.translate(dx, dy), &moved)
        );
    }

    #[test]
    fn rotated_corners_are_centred(
        center in any_point(),
        width in 0.0f64..5000.0,
        height in 0.0f64..5000.0,
        rotation in -720.0f64..720.0,
    ) {
        let corners = rotated_rectangle_corners(center, width, height, rotation);
        let cx = corners.iter().map(|p| p.x).sum::<f64>() / 4.0;
        let cy = corners.iter().map(|p| p.y).sum::<f64>() / 4.0;
        prop_assert!((cx - center.x).abs() < 1e-6);
        prop_assert!((cy - center.y).abs() < 1e-6);
    }

    #[test]
    fn closest_point_stays_on_segment(
        point in any_point(),
        start in any_point(),
        end in any_point(),
    ) {
        let closest = closest_point_on_line_segment(point, start, end);
        let length = start.distance_to(&end);
        let via = start.distance_to(&closest) + closest.distance_to(&end);
        prop_assert!((via - length).abs() <= 1e-6 * length.max(1.0));
    }

    #[test]
    fn degenerate_segment_returns_start(point in any_point(), start in any_point()) {
        prop_assert_eq!(closest_point_on_line_segment(point, start, start), start);
    }

    #[test]
    fn grid_snapping_is_idempotent(point in any_point()) {
        let once = check_grid_snapping(point, 1.0);
        let twice = check_grid_snapping(once.position, 1.0);
        prop_assert!(twice.is_snapped);
        prop_assert_eq!(twice.position, once.position);
    }

    #[test]
    fn door_conflict_is_symmetric(
        (wall_a, wall_b) in (0usize..3, 0usize..3),
        (pos_a, pos_b) in (0.1f64..0.9, 0.1f64..0.9),
        (width_a, width_b) in (0.0f64..1.0, 0.0f64..1.0),
    ) {
        let a = Door::new(wall_a, pos_a, 0.0, width_a);
        let b = Door::new(wall_b, pos_b, 0.0, width_b);
        prop_assert_eq!(
            check_door_conflict(&a, std::slice::from_ref(&b), a.width),
            check_door_conflict(&b, std::slice::from_ref(&a), b.width)
        );
    }
}
