//! Polygon mesh data as copied out of the host scene.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::shader::ShaderNode;

/// An evaluated polygon mesh.
///
/// Faces are arbitrary simple polygons; the converter triangulates them.
/// Vertex and face indices are local to this mesh only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshData {
    /// Ordered vertex list.
    pub vertices: Vec<MeshVertex>,
    /// Ordered polygonal face list.
    pub faces: Vec<PolygonFace>,
    /// Ordered material slots; faces reference these by index.
    pub slots: Vec<MaterialSlot>,
}

impl MeshData {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of polygonal faces (before triangulation).
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Add a vertex and return its index.
    pub fn add_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(MeshVertex { position, normal });
        index
    }

    /// Add a polygonal face over existing vertex indices.
    pub fn add_face(&mut self, vertices: Vec<u32>, material: u32, smooth: bool) {
        self.faces.push(PolygonFace {
            vertices,
            material,
            smooth,
        });
    }

    /// Add a material slot and return its index.
    pub fn add_slot(&mut self, slot: MaterialSlot) -> u32 {
        let index = self.slots.len() as u32;
        self.slots.push(slot);
        index
    }
}

/// A single mesh vertex.
///
/// The normal is mandatory here even though some hosts model it as optional:
/// evaluated meshes always carry normals, and the adaptation layer is
/// expected to synthesize them (from face geometry) in the rare case its
/// source does not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeshVertex {
    /// Position in object-local space.
    pub position: Vec3,
    /// Unit vertex normal in object-local space.
    pub normal: Vec3,
}

/// A polygonal face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolygonFace {
    /// Vertex indices forming a simple polygon, in winding order.
    pub vertices: Vec<u32>,
    /// Material slot index.
    pub material: u32,
    /// Smooth shading flag.
    pub smooth: bool,
}

impl PolygonFace {
    /// Create a face with the default material slot and flat shading.
    pub fn new(vertices: Vec<u32>) -> Self {
        Self {
            vertices,
            material: 0,
            smooth: false,
        }
    }
}

/// A per-object material slot.
///
/// An empty slot (no shading nodes) converts to the default material record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialSlot {
    /// Material name.
    pub name: String,
    /// Shading nodes of the assigned material's graph.
    pub nodes: Vec<ShaderNode>,
}

impl MaterialSlot {
    /// Create a slot from a material's shading nodes.
    pub fn new(name: impl Into<String>, nodes: Vec<ShaderNode>) -> Self {
        Self {
            name: name.into(),
            nodes,
        }
    }

    /// Create an empty slot (no material assigned).
    pub fn empty() -> Self {
        Self::default()
    }
}
