//! jsd-convert: Scene-to-document conversion pipeline.
//!
//! Walks an evaluated [`Scene`](jsd_scene::Scene) and assembles the in-memory
//! JSD [`Document`]:
//!
//! ```text
//! Scene ──per object──> triangulate ──> axis convert ──> MeshRecord
//!       └─ cameras ─────────────────────────────────────> CameraRecord
//!       └─ world ──── background node ──────────────────> WorldRecord
//! ```
//!
//! Conversion is synchronous and batch: one call builds the whole document or
//! fails with the first structural error. Objects of unhandled kinds are
//! skipped silently; scene iteration order is preserved.

pub mod coords;
pub mod document;
pub mod error;
pub mod material;
pub mod triangulate;

pub use document::{
    CameraRecord, Document, FaceRecord, MaterialRecord, MeshRecord, VertexRecord, WorldRecord,
};
pub use error::{ConvertError, Result};
pub use triangulate::{BeautyTriangulator, FanTriangulator, Triangulator};

use glam::Mat3;
use jsd_scene::{CameraData, MeshData, ObjectData, Scene, SceneObject};
use log::debug;

use coords::to_y_up;

/// Which polygon split strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriangulationPolicy {
    /// Quality splits avoiding skinny triangles (source exporter behavior).
    #[default]
    Beauty,
    /// Plain fan from the first polygon vertex.
    Fan,
}

impl TriangulationPolicy {
    /// Get the strategy implementation for this policy.
    pub fn strategy(self) -> &'static dyn Triangulator {
        match self {
            TriangulationPolicy::Beauty => &BeautyTriangulator,
            TriangulationPolicy::Fan => &FanTriangulator,
        }
    }
}

/// Options for scene conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Apply the Y-up axis swap to camera `rotation` Euler angles.
    ///
    /// Off by default: the source exporter emits camera rotation in the raw
    /// source convention while converting every other vector, and existing
    /// consumers depend on that. Turn this on for a consistent document.
    pub convert_camera_rotation: bool,
    /// Polygon split strategy.
    pub triangulation: TriangulationPolicy,
}

impl ConvertOptions {
    /// Create default convert options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also axis-convert camera rotation angles.
    pub fn with_converted_camera_rotation(mut self) -> Self {
        self.convert_camera_rotation = true;
        self
    }

    /// Set the triangulation policy.
    pub fn with_triangulation(mut self, policy: TriangulationPolicy) -> Self {
        self.triangulation = policy;
        self
    }
}

/// Convert an evaluated scene into a JSD document.
///
/// Meshes and cameras are converted in scene order; other object kinds are
/// skipped. The world is processed once, independent of the object loop.
pub fn convert_scene(scene: &Scene, options: &ConvertOptions) -> Result<Document> {
    let mut doc = Document::default();

    for object in &scene.objects {
        match &object.data {
            ObjectData::Mesh(mesh) => {
                let record = convert_mesh(object, mesh, options)?;
                debug!(
                    "converted mesh '{}': {} vertices, {} faces, {} materials",
                    record.name,
                    record.vertices.len(),
                    record.faces.len(),
                    record.materials.len()
                );
                doc.objects.push(record);
            }
            ObjectData::Camera(camera) => {
                let record = convert_camera(object, camera, options);
                debug!("converted camera '{}'", record.name);
                doc.cameras.push(record);
            }
            ObjectData::Other => {
                debug!("skipping object '{}' of unhandled kind", object.name);
            }
        }
    }

    doc.world = WorldRecord {
        kind: "world".to_string(),
        name: scene.world.name.clone(),
        color: material::world_color(&scene.world.nodes).to_array(),
    };

    Ok(doc)
}

/// Convert one mesh object: triangulate, transform to world space, swap axes.
fn convert_mesh(
    object: &SceneObject,
    mesh: &MeshData,
    options: &ConvertOptions,
) -> Result<MeshRecord> {
    let triangles =
        triangulate::triangulate_mesh(&object.name, mesh, options.triangulation.strategy())?;

    let world = object.transform;
    // Normals use the linear part only; translation must not leak in. They
    // are deliberately not re-normalized, so non-uniform scale carries
    // through exactly as the source exporter produced it.
    let linear = Mat3::from_mat4(world);

    let mut record = MeshRecord::new(&object.name);

    record.materials = mesh
        .slots
        .iter()
        .map(|slot| material::extract(&slot.nodes))
        .collect();

    record.vertices = mesh
        .vertices
        .iter()
        .map(|v| VertexRecord {
            p: to_y_up(world.transform_point3(v.position)).to_array(),
            n: to_y_up(linear * v.normal).to_array(),
        })
        .collect();

    let empty_slots = mesh.slots.is_empty();
    record.faces = triangles
        .iter()
        .map(|tri| {
            let a = mesh.vertices[tri.vi[0] as usize].position;
            let b = mesh.vertices[tri.vi[1] as usize].position;
            let c = mesh.vertices[tri.vi[2] as usize].position;
            let local_normal = (b - a).cross(c - a).normalize_or_zero();

            FaceRecord {
                vi: tri.vi,
                mat_id: if empty_slots { -1 } else { tri.material as i32 },
                sm: tri.smooth,
                n: to_y_up(linear * local_normal).to_array(),
            }
        })
        .collect();

    Ok(record)
}

/// Convert one camera object.
///
/// Position and the right/up/forward axes come from the world matrix columns
/// and go through the axis swap; `forward` is the negated third column.
/// `rotation` stays in the source convention unless
/// [`ConvertOptions::convert_camera_rotation`] is set.
fn convert_camera(
    object: &SceneObject,
    camera: &CameraData,
    options: &ConvertOptions,
) -> CameraRecord {
    let m = object.transform;
    let rotation = if options.convert_camera_rotation {
        to_y_up(camera.euler)
    } else {
        camera.euler
    };

    CameraRecord {
        kind: "camera".to_string(),
        name: object.name.clone(),
        near_plane: camera.clip_start,
        far_plane: camera.clip_end,
        sensor_size: [camera.sensor_width, camera.sensor_height],
        fov: [camera.angle_x, camera.angle_y],
        position: to_y_up(m.w_axis.truncate()).to_array(),
        rotation: rotation.to_array(),
        right: to_y_up(m.x_axis.truncate()).to_array(),
        up: to_y_up(m.y_axis.truncate()).to_array(),
        forward: to_y_up(-m.z_axis.truncate()).to_array(),
    }
}
