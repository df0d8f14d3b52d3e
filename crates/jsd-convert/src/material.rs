//! Canonical material extraction.
//!
//! A material's shading graph is arbitrarily shaped; only three node kinds
//! are captured, layered in a fixed order over a defaulted record. Later
//! matches deliberately override fields set by earlier ones. Unrecognized
//! graphs are not an error and yield the default record.

use glam::Vec3;
use jsd_scene::ShaderNode;

use crate::document::MaterialRecord;

/// Extract the canonical material record from a shading-node list.
///
/// Layering order: defaults, then a Principled node's fields, then a pure
/// emission node's `color * strength`, then a glass node (which forces
/// `transmission = 1` and overrides base color, roughness and IOR).
pub fn extract(nodes: &[ShaderNode]) -> MaterialRecord {
    let mut record = MaterialRecord::default();

    if let Some(ShaderNode::Principled {
        base_color,
        emission,
        roughness,
        metallic,
        transmission,
        ior,
    }) = find_principled(nodes)
    {
        record.base_color = base_color.to_array();
        record.emission = emission.to_array();
        record.roughness = *roughness;
        record.metallic = *metallic;
        record.transmission = *transmission;
        record.ior = *ior;
    }

    if let Some(ShaderNode::Emission { color, strength }) = find_emission(nodes) {
        record.emission = (*color * *strength).to_array();
    }

    if let Some(ShaderNode::Glass {
        color,
        roughness,
        ior,
    }) = find_glass(nodes)
    {
        record.transmission = 1.0;
        record.base_color = color.to_array();
        record.roughness = *roughness;
        record.ior = *ior;
    }

    record
}

/// Extract the world background color from a shading-node list.
///
/// The first background node contributes `color * strength`; a world with no
/// background node is black.
pub fn world_color(nodes: &[ShaderNode]) -> Vec3 {
    nodes
        .iter()
        .find_map(|node| match node {
            ShaderNode::Background { color, strength } => Some(*color * *strength),
            _ => None,
        })
        .unwrap_or(Vec3::ZERO)
}

fn find_principled(nodes: &[ShaderNode]) -> Option<&ShaderNode> {
    nodes
        .iter()
        .find(|n| matches!(n, ShaderNode::Principled { .. }))
}

fn find_emission(nodes: &[ShaderNode]) -> Option<&ShaderNode> {
    nodes
        .iter()
        .find(|n| matches!(n, ShaderNode::Emission { .. }))
}

fn find_glass(nodes: &[ShaderNode]) -> Option<&ShaderNode> {
    nodes.iter().find(|n| matches!(n, ShaderNode::Glass { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principled() -> ShaderNode {
        ShaderNode::Principled {
            base_color: Vec3::new(0.8, 0.2, 0.1),
            emission: Vec3::new(0.1, 0.1, 0.1),
            roughness: 0.9,
            metallic: 1.0,
            transmission: 0.25,
            ior: 1.33,
        }
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(extract(&[]), MaterialRecord::default());
        assert_eq!(extract(&[ShaderNode::Unknown]), MaterialRecord::default());
    }

    #[test]
    fn test_principled_fields() {
        let mat = extract(&[principled()]);
        assert_eq!(mat.base_color, [0.8, 0.2, 0.1]);
        assert_eq!(mat.emission, [0.1, 0.1, 0.1]);
        assert_eq!(mat.roughness, 0.9);
        assert_eq!(mat.metallic, 1.0);
        assert_eq!(mat.transmission, 0.25);
        assert_eq!(mat.ior, 1.33);
    }

    #[test]
    fn test_emission_overrides_principled() {
        let mat = extract(&[
            principled(),
            ShaderNode::emission(Vec3::new(1.0, 0.5, 0.0), 4.0),
        ]);
        assert_eq!(mat.emission, [4.0, 2.0, 0.0]);
        // The rest of the principled fields survive.
        assert_eq!(mat.base_color, [0.8, 0.2, 0.1]);
    }

    #[test]
    fn test_emission_extraction_order_independent() {
        // The layering is by node kind, not by list position.
        let mat = extract(&[
            ShaderNode::emission(Vec3::ONE, 2.0),
            principled(),
        ]);
        assert_eq!(mat.emission, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_glass_forces_transmission() {
        let mat = extract(&[
            principled(),
            ShaderNode::Glass {
                color: Vec3::new(0.9, 0.9, 1.0),
                roughness: 0.05,
                ior: 1.45,
            },
        ]);
        assert_eq!(mat.transmission, 1.0);
        assert_eq!(mat.base_color, [0.9, 0.9, 1.0]);
        assert_eq!(mat.roughness, 0.05);
        assert_eq!(mat.ior, 1.45);
        // Metallic still comes from the principled node.
        assert_eq!(mat.metallic, 1.0);
    }

    #[test]
    fn test_world_color_scales_by_strength() {
        let nodes = [ShaderNode::background(Vec3::new(0.2, 0.4, 0.6), 0.5)];
        assert_eq!(world_color(&nodes), Vec3::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_world_color_fallback_black() {
        assert_eq!(world_color(&[]), Vec3::ZERO);
        assert_eq!(world_color(&[ShaderNode::Unknown]), Vec3::ZERO);
    }
}
