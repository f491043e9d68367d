use crate::source::TrackPoint;

/// Bearing in degrees from `previous` to `current`, quadrant-corrected.
///
/// The raw `atan(dx/dy)` only covers the northern half-plane; headings into
/// the southern quadrants get the +-180 correction. A purely east-west step
/// (dy = 0) is pinned to +-90 rather than running the division through
/// signed infinity.
pub fn heading_between(current: TrackPoint, previous: TrackPoint) -> f64 {
    let dx = current.x - previous.x;
    let dy = current.y - previous.y;

    if dy == 0.0 {
        return if dx > 0.0 {
            90.0
        } else if dx < 0.0 {
            -90.0
        } else {
            0.0
        };
    }

    let mut bearing = (dx / dy).atan().to_degrees();
    if dy < 0.0 && dx < 0.0 {
        bearing -= 180.0;
    }
    if dy < 0.0 && dx > 0.0 {
        bearing += 180.0;
    }
    bearing
}
