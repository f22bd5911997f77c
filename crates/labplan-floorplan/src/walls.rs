//! Nearest-wall queries against the room boundary and interior walls.

use labplan_core::{Point, WallSegment};

/// Nearest room-boundary edge to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestWall {
    /// Edge endpoints, `room[index]` to `room[index + 1]` (wrapping).
    pub segment: (Point, Point),
    pub distance: f64,
    pub index: usize,
    /// Closest point on the edge.
    pub point: Point,
}

/// Nearest interior wall to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestInteriorWall<'a> {
    pub wall: &'a WallSegment,
    pub index: usize,
    pub distance: f64,
    pub point: Point,
}

/// Projects `point` onto the segment and clamps to its endpoints.
///
/// A zero-length segment returns `line_start`.
pub fn closest_point_on_line_segment(point: Point, line_start: Point, line_end: Point) -> Point {
    let direction = line_end - line_start;
    let length_sq = direction.length_squared();

    if length_sq == 0.0 {
        return line_start;
    }

    let t = ((point - line_start).dot(&direction) / length_sq).clamp(0.0, 1.0);
    line_start.lerp(&line_end, t)
}

/// Finds the room edge closest to `point`, including the closing edge.
///
/// Returns `None` for fewer than two points. On an exact tie the first edge
/// in ring order wins.
pub fn find_closest_wall_segment(point: Point, room: &[Point]) -> Option<ClosestWall> {
    if room.len() < 2 {
        return None;
    }

    let mut best: Option<ClosestWall> = None;
    for i in 0..room.len() {
        let start = room[i];
        let end = room[(i + 1) % room.len()];
        let closest = closest_point_on_line_segment(point, start, end);
        let distance = point.distance_to(&closest);

        if best.is_none_or(|b| distance < b.distance) {
            best = Some(ClosestWall {
                segment: (start, end),
                distance,
                index: i,
                point: closest,
            });
        }
    }

    best
}

/// Same rule as [`find_closest_wall_segment`], applied to free-standing walls.
pub fn find_closest_interior_wall(
    point: Point,
    walls: &[WallSegment],
) -> Option<ClosestInteriorWall<'_>> {
    walls
        .iter()
        .enumerate()
        .map(|(index, wall)| {
            let closest = closest_point_on_line_segment(point, wall.start, wall.end);
            ClosestInteriorWall {
                wall,
                index,
                distance: point.distance_to(&closest),
                point: closest,
            }
        })
        .fold(None, |best, candidate| match best {
            Some(b) if b.distance <= candidate.distance => Some(b),
            _ => Some(candidate),
        })
}

/// Wall direction in degrees, `atan2(dy, dx)`.
pub fn wall_angle(wall_start: Point, wall_end: Point) -> f64 {
    (wall_end.y - wall_start.y)
        .atan2(wall_end.x - wall_start.x)
        .to_degrees()
}
