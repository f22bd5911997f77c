//! Polygon containment: point-in-polygon and product-in-room tests.

use labplan_core::{PlacedProduct, Point};

/// Even-odd ray-casting test.
///
/// Returns `false` for rings with fewer than three points. Points lying
/// exactly on an edge may land on either side.
pub fn is_point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;

    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);

        if ((yi > point.y) != (yj > point.y))
            && (point.x < (xj - xi) * (point.y - yi) / (yj - yi) + xi)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Corners of a `width` x `height` rectangle centred on `center` and rotated
/// by `rotation` degrees (clockwise on the y-down canvas).
///
/// Order is top-left, top-right, bottom-right, bottom-left of the unrotated
/// rectangle.
pub fn rotated_rectangle_corners(
    center: Point,
    width: f64,
    height: f64,
    rotation: f64,
) -> [Point; 4] {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let (sin, cos) = rotation.to_radians().sin_cos();

    [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)].map(|(x, y)| {
        Point::new(center.x + x * cos - y * sin, center.y + x * sin + y * cos)
    })
}

/// Corner-only containment check for a placed product.
///
/// The footprint is `dimensions.length * scale` wide and
/// `dimensions.width * scale` tall, anchored at its top-left `position` and
/// rotated about its centre. Every corner must lie inside the room. A room
/// with fewer than three points imposes no constraint.
pub fn is_product_within_room(product: &PlacedProduct, room: &[Point], scale: f64) -> bool {
    if room.len() < 3 {
        return true;
    }

    let (width, height) = product.footprint(scale);
    let center = product.position.translate(width / 2.0, height / 2.0);

    rotated_rectangle_corners(center, width, height, product.rotation)
        .iter()
        .all(|corner| is_point_in_polygon(*corner, room))
}
