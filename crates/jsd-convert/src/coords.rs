//! Coordinate-system conversion.
//!
//! The host scene is Z-up; the JSD consumer is Y-up with flipped handedness.
//! Every position and direction in the document goes through [`to_y_up`]
//! exactly once. Scalars (angles, distances) pass through unchanged.

use glam::Vec3;

/// Map a vector from the source Z-up convention to the target Y-up one.
///
/// `(x, y, z)` becomes `(x, z, -y)`. Pure and total; applying it twice is not
/// the identity, so it must never be applied to an already-converted value.
#[inline]
pub fn to_y_up(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, -v.y)
}
