//! JSD document schema.
//!
//! These types mirror the JSD wire format one-to-one; field names and order
//! are part of the format and must not change. The document is built once per
//! export and never mutated afterwards.
//!
//! This is the revised schema with top-level `objects`, `cameras` and `world`
//! keys. The earlier objects-only revision is not supported.

use serde::{Deserialize, Serialize};

/// Root JSD document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Converted mesh objects, in scene iteration order.
    pub objects: Vec<MeshRecord>,
    /// Converted cameras, in scene iteration order.
    pub cameras: Vec<CameraRecord>,
    /// The scene-wide world record.
    pub world: WorldRecord,
}

impl Document {
    /// Get the number of mesh records.
    pub fn mesh_count(&self) -> usize {
        self.objects.len()
    }

    /// Get the number of camera records.
    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }
}

/// A converted mesh object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshRecord {
    /// Record tag, always `"mesh"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Object name.
    pub name: String,
    /// Material records, one per material slot.
    pub materials: Vec<MaterialRecord>,
    /// World-space vertices, Y-up.
    pub vertices: Vec<VertexRecord>,
    /// Triangular faces over `vertices`.
    pub faces: Vec<FaceRecord>,
}

impl MeshRecord {
    /// Create an empty mesh record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: "mesh".to_string(),
            name: name.into(),
            materials: Vec::new(),
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }
}

/// A single output vertex.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VertexRecord {
    /// World-space position, Y-up.
    pub p: [f32; 3],
    /// World-space vertex normal, Y-up. Not re-normalized after transform.
    pub n: [f32; 3],
}

/// A single output triangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceRecord {
    /// Exactly three vertex indices, 0-based, local to the owning object.
    pub vi: [u32; 3],
    /// Index into the owning object's `materials`, or `-1` when that list is
    /// empty and consumers must apply the default material.
    pub mat_id: i32,
    /// Smooth shading flag carried over from the source face.
    pub sm: bool,
    /// World-space geometric face normal, Y-up.
    pub n: [f32; 3],
}

/// A converted camera.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraRecord {
    /// Record tag, always `"camera"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Object name.
    pub name: String,
    /// Near clip distance.
    pub near_plane: f32,
    /// Far clip distance.
    pub far_plane: f32,
    /// Sensor width and height in millimeters.
    pub sensor_size: [f32; 2],
    /// Horizontal and vertical field of view in radians.
    pub fov: [f32; 2],
    /// World-space position, Y-up.
    pub position: [f32; 3],
    /// Euler rotation in the source convention, not axis-converted by
    /// default. See `ConvertOptions::convert_camera_rotation`.
    pub rotation: [f32; 3],
    /// Camera right axis, Y-up.
    pub right: [f32; 3],
    /// Camera up axis, Y-up.
    pub up: [f32; 3],
    /// Camera viewing direction, Y-up.
    pub forward: [f32; 3],
}

/// The world/environment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldRecord {
    /// Record tag, always `"world"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// World name.
    pub name: String,
    /// Background emission color; black when no background node was found.
    pub color: [f32; 3],
}

impl Default for WorldRecord {
    fn default() -> Self {
        Self {
            kind: "world".to_string(),
            name: "World".to_string(),
            color: [0.0, 0.0, 0.0],
        }
    }
}

/// A canonical fixed-field material.
///
/// The default values double as the fallback consumers apply when an object
/// has no material slots at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Base color (RGB).
    pub base_color: [f32; 3],
    /// Transmission factor.
    pub transmission: f32,
    /// Roughness factor.
    pub roughness: f32,
    /// Metallic factor.
    pub metallic: f32,
    /// Index of refraction.
    pub ior: f32,
    /// Emission color (RGB).
    pub emission: [f32; 3],
}

impl Default for MaterialRecord {
    fn default() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0],
            transmission: 0.0,
            roughness: 0.5,
            metallic: 0.0,
            ior: 1.5,
            emission: [0.0, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tags() {
        assert_eq!(MeshRecord::new("cube").kind, "mesh");
        assert_eq!(WorldRecord::default().kind, "world");
    }

    #[test]
    fn test_default_material_values() {
        let mat = MaterialRecord::default();
        assert_eq!(mat.base_color, [1.0, 1.0, 1.0]);
        assert_eq!(mat.transmission, 0.0);
        assert_eq!(mat.roughness, 0.5);
        assert_eq!(mat.metallic, 0.0);
        assert_eq!(mat.ior, 1.5);
        assert_eq!(mat.emission, [0.0, 0.0, 0.0]);
    }
}
