//! Camera parameters as exposed by the host.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Evaluated camera parameters.
///
/// The camera's placement comes from the owning object's world transform;
/// `euler` additionally carries the host's raw rotation representation, which
/// the document emits verbatim (see the converter's camera notes).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraData {
    /// Near clip distance.
    pub clip_start: f32,
    /// Far clip distance.
    pub clip_end: f32,
    /// Sensor width in millimeters.
    pub sensor_width: f32,
    /// Sensor height in millimeters.
    pub sensor_height: f32,
    /// Horizontal field of view in radians.
    pub angle_x: f32,
    /// Vertical field of view in radians.
    pub angle_y: f32,
    /// Rotation as Euler angles in the host's convention.
    pub euler: Vec3,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            clip_start: 0.1,
            clip_end: 100.0,
            sensor_width: 36.0,
            sensor_height: 24.0,
            angle_x: 0.691_111_2,
            angle_y: 0.471_239_0,
            euler: Vec3::ZERO,
        }
    }
}
