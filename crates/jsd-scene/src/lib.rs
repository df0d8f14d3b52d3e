//! jsd-scene: Evaluated scene snapshot model for the JSD exporter.
//!
//! The exporter never holds live references into host (DCC application)
//! memory. The host adaptation layer evaluates its dependency graph, applies
//! modifiers, and copies the result into these value types once per export.
//! Everything here is built once and then read-only for the duration of the
//! conversion.

pub mod camera;
pub mod mesh;
pub mod shader;

pub use camera::CameraData;
pub use mesh::{MaterialSlot, MeshData, MeshVertex, PolygonFace};
pub use shader::ShaderNode;

use glam::Mat4;
use serde::{Deserialize, Serialize};

/// An evaluated scene, ready for conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name.
    pub name: String,
    /// Objects in native scene iteration order.
    pub objects: Vec<SceneObject>,
    /// The scene-wide world/environment description.
    pub world: World,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an object and return its index.
    pub fn add_object(&mut self, object: SceneObject) -> usize {
        let index = self.objects.len();
        self.objects.push(object);
        index
    }

    /// Number of mesh objects.
    pub fn mesh_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| matches!(o.data, ObjectData::Mesh(_)))
            .count()
    }

    /// Number of camera objects.
    pub fn camera_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| matches!(o.data, ObjectData::Camera(_)))
            .count()
    }
}

/// A single scene object with its final world transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    /// Object name.
    pub name: String,
    /// World-space transform (4x4 affine).
    pub transform: Mat4,
    /// Kind-specific payload.
    pub data: ObjectData,
}

impl SceneObject {
    /// Create a mesh object with an identity transform.
    pub fn mesh(name: impl Into<String>, mesh: MeshData) -> Self {
        Self {
            name: name.into(),
            transform: Mat4::IDENTITY,
            data: ObjectData::Mesh(mesh),
        }
    }

    /// Create a camera object with an identity transform.
    pub fn camera(name: impl Into<String>, camera: CameraData) -> Self {
        Self {
            name: name.into(),
            transform: Mat4::IDENTITY,
            data: ObjectData::Camera(camera),
        }
    }

    /// Create an object of a kind the exporter does not handle.
    pub fn other(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Mat4::IDENTITY,
            data: ObjectData::Other,
        }
    }

    /// Set the world transform.
    pub fn transformed(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }
}

/// Kind-specific object data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ObjectData {
    /// Evaluated polygon mesh.
    Mesh(MeshData),
    /// Camera parameters.
    Camera(CameraData),
    /// Lights, empties, curves and other kinds the exporter skips.
    Other,
}

/// The scene-wide world/environment description.
///
/// Holds the emissive background shading nodes. A world with no recognized
/// background node converts to black.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// World name.
    pub name: String,
    /// Shading nodes describing the background.
    pub nodes: Vec<ShaderNode>,
}

impl Default for World {
    fn default() -> Self {
        Self {
            name: "World".to_string(),
            nodes: Vec::new(),
        }
    }
}

impl World {
    /// Create a world from its background nodes.
    pub fn new(name: impl Into<String>, nodes: Vec<ShaderNode>) -> Self {
        Self {
            name: name.into(),
            nodes,
        }
    }
}
