use rand::Rng;

use super::ZonePolygon;

/// Propose a uniformly random candidate inside the polygon's bounding box
///
/// The candidate may fall outside the polygon itself; containment is left
/// to the caller. Draws x first, then y.
pub fn sample<R: Rng + ?Sized>(polygon: &ZonePolygon, rng: &mut R) -> (f64, f64) {
    let bounds = polygon.bounds();
    let x = rng.gen_range(bounds.min_x..bounds.max_x);
    let y = rng.gen_range(bounds.min_y..bounds.max_y);
    (x, y)
}
