//! Polygon triangulation.
//!
//! Faces arrive as arbitrary simple polygons and leave as triangles. The
//! split heuristic is pluggable behind [`Triangulator`]; the default
//! [`BeautyTriangulator`] picks cuts that avoid skinny triangles, matching
//! the source exporter's "beauty" policy for quads and ngons.

use glam::Vec3;
use jsd_scene::MeshData;

use crate::error::{ConvertError, Result};

/// Strategy for splitting one polygon into triangles.
pub trait Triangulator {
    /// Split a simple polygon given as a ring of at least 3 positions in
    /// winding order. Returns triangles as indices into the ring, preserving
    /// the ring's winding.
    fn split(&self, ring: &[Vec3]) -> Vec<[usize; 3]>;
}

/// Quality-driven triangulation.
///
/// Quads choose the diagonal whose worse triangle has the larger minimum
/// corner angle. Ngons are ear-clipped greedily, always taking the valid ear
/// with the best minimum corner angle. Degenerate polygons (zero area, self
/// intersections) are split best-effort; no validation rejects the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeautyTriangulator;

impl Triangulator for BeautyTriangulator {
    fn split(&self, ring: &[Vec3]) -> Vec<[usize; 3]> {
        match ring.len() {
            0..=2 => Vec::new(),
            3 => vec![[0, 1, 2]],
            4 => split_quad(ring),
            _ => clip_ears(ring),
        }
    }
}

/// Trivial fan triangulation from the first ring vertex.
///
/// Only correct for convex polygons; kept as the cheap alternative strategy
/// and as a reference in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FanTriangulator;

impl Triangulator for FanTriangulator {
    fn split(&self, ring: &[Vec3]) -> Vec<[usize; 3]> {
        if ring.len() < 3 {
            return Vec::new();
        }
        (1..ring.len() - 1).map(|i| [0, i, i + 1]).collect()
    }
}

/// A triangulated face, still in input vertex index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    /// Vertex indices into the source mesh, winding preserved.
    pub vi: [u32; 3],
    /// Material slot index of the originating polygon.
    pub material: u32,
    /// Smooth flag of the originating polygon.
    pub smooth: bool,
}

/// Triangulate every face of a mesh.
///
/// Triangles pass through unchanged; larger polygons go through `strategy`.
/// A face with fewer than 3 vertices, an out-of-range vertex index, or a
/// material slot index outside the mesh's slot list rejects the whole mesh.
/// Slot indices are not checked on slotless meshes, where every face
/// converts to the absent (`-1`) material.
pub fn triangulate_mesh(
    object: &str,
    mesh: &MeshData,
    strategy: &dyn Triangulator,
) -> Result<Vec<Triangle>> {
    let vertex_count = mesh.vertices.len() as u32;
    let slot_count = mesh.slots.len() as u32;
    let mut triangles = Vec::with_capacity(mesh.faces.len());

    for (face_index, face) in mesh.faces.iter().enumerate() {
        if face.vertices.len() < 3 {
            return Err(ConvertError::DegenerateFace {
                object: object.to_string(),
                face: face_index,
            });
        }
        if let Some(&vertex) = face.vertices.iter().find(|&&v| v >= vertex_count) {
            return Err(ConvertError::VertexOutOfRange {
                object: object.to_string(),
                face: face_index,
                vertex,
            });
        }
        if slot_count > 0 && face.material >= slot_count {
            return Err(ConvertError::MaterialOutOfRange {
                object: object.to_string(),
                face: face_index,
                material: face.material,
            });
        }

        if face.vertices.len() == 3 {
            triangles.push(Triangle {
                vi: [face.vertices[0], face.vertices[1], face.vertices[2]],
                material: face.material,
                smooth: face.smooth,
            });
            continue;
        }

        let ring: Vec<Vec3> = face
            .vertices
            .iter()
            .map(|&v| mesh.vertices[v as usize].position)
            .collect();

        for tri in strategy.split(&ring) {
            triangles.push(Triangle {
                vi: [
                    face.vertices[tri[0]],
                    face.vertices[tri[1]],
                    face.vertices[tri[2]],
                ],
                material: face.material,
                smooth: face.smooth,
            });
        }
    }

    Ok(triangles)
}

/// Polygon normal via Newell's method. Zero for degenerate rings.
fn polygon_normal(ring: &[Vec3]) -> Vec3 {
    let mut normal = Vec3::ZERO;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        normal += Vec3::new(
            (a.y - b.y) * (a.z + b.z),
            (a.z - b.z) * (a.x + b.x),
            (a.x - b.x) * (a.y + b.y),
        );
    }
    normal.normalize_or_zero()
}

/// Minimum interior corner angle of a triangle, in radians.
/// Degenerate triangles score 0.
fn min_corner_angle(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    let ab = b - a;
    let bc = c - b;
    let ca = a - c;
    if ab.length_squared() < 1e-12 || bc.length_squared() < 1e-12 || ca.length_squared() < 1e-12 {
        return 0.0;
    }
    let alpha = ab.angle_between(-ca);
    let beta = bc.angle_between(-ab);
    let gamma = ca.angle_between(-bc);
    alpha.min(beta).min(gamma)
}

/// Barycentric point-in-triangle test, inclusive of edges.
fn point_in_triangle(p: Vec3, a: Vec3, b: Vec3, c: Vec3) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() < 1e-12 {
        return false;
    }
    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;
    u >= -1e-6 && v >= -1e-6 && u + v <= 1.0 + 1e-6
}

/// Split a quad along the diagonal with the better worst triangle.
fn split_quad(ring: &[Vec3]) -> Vec<[usize; 3]> {
    let normal = polygon_normal(ring);

    // Score a candidate split; splits producing a flipped triangle (the
    // diagonal leaves the polygon at a reflex corner) score negative.
    let score = |tris: &[[usize; 3]; 2]| -> f32 {
        let mut worst = f32::INFINITY;
        for tri in tris {
            let (a, b, c) = (ring[tri[0]], ring[tri[1]], ring[tri[2]]);
            if (b - a).cross(c - a).dot(normal) <= 0.0 {
                return -1.0;
            }
            worst = worst.min(min_corner_angle(a, b, c));
        }
        worst
    };

    let diag02 = [[0, 1, 2], [0, 2, 3]];
    let diag13 = [[0, 1, 3], [1, 2, 3]];
    if score(&diag02) >= score(&diag13) {
        diag02.to_vec()
    } else {
        diag13.to_vec()
    }
}

/// Greedy beauty ear clipping for ngons.
fn clip_ears(ring: &[Vec3]) -> Vec<[usize; 3]> {
    let normal = polygon_normal(ring);
    let mut remaining: Vec<usize> = (0..ring.len()).collect();
    let mut triangles = Vec::with_capacity(ring.len() - 2);

    while remaining.len() > 3 {
        let n = remaining.len();
        let mut best_valid: Option<(usize, f32)> = None;
        let mut best_any = (0usize, -1.0f32);

        for i in 0..n {
            let ia = remaining[(i + n - 1) % n];
            let ib = remaining[i];
            let ic = remaining[(i + 1) % n];
            let (a, b, c) = (ring[ia], ring[ib], ring[ic]);

            let angle = min_corner_angle(a, b, c);
            if angle > best_any.1 {
                best_any = (i, angle);
            }

            // An ear must be convex and contain no other remaining vertex.
            if (b - a).cross(c - b).dot(normal) <= 0.0 {
                continue;
            }
            let blocked = remaining.iter().any(|&j| {
                j != ia && j != ib && j != ic && point_in_triangle(ring[j], a, b, c)
            });
            if blocked {
                continue;
            }
            if best_valid.map_or(true, |(_, best)| angle > best) {
                best_valid = Some((i, angle));
            }
        }

        // Degenerate input: no valid ear exists. Clip the least-bad corner
        // anyway rather than failing (accepted limitation).
        let (i, _) = best_valid.unwrap_or(best_any);
        let n = remaining.len();
        triangles.push([
            remaining[(i + n - 1) % n],
            remaining[i],
            remaining[(i + 1) % n],
        ]);
        remaining.remove(i);
    }

    triangles.push([remaining[0], remaining[1], remaining[2]]);
    triangles
}
