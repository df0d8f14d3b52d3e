//! Tagged shading-node description.
//!
//! The host adaptation layer walks the application's material node graph once
//! and produces a flat list of these tagged variants. The converter only
//! recognizes the four named shapes below; everything else is `Unknown` and
//! falls back to defaults. Export is lossy by design.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A recognized shading-graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShaderNode {
    /// Principled-style surface shader.
    Principled {
        /// Base color (RGB).
        base_color: Vec3,
        /// Emission color (RGB).
        emission: Vec3,
        /// Roughness factor.
        roughness: f32,
        /// Metallic factor.
        metallic: f32,
        /// Transmission factor.
        transmission: f32,
        /// Index of refraction.
        ior: f32,
    },
    /// Pure emission shader.
    Emission {
        /// Emission color (RGB).
        color: Vec3,
        /// Emission strength multiplier.
        strength: f32,
    },
    /// Glass/refractive shader.
    Glass {
        /// Tint color (RGB).
        color: Vec3,
        /// Roughness factor.
        roughness: f32,
        /// Index of refraction.
        ior: f32,
    },
    /// World background shader.
    Background {
        /// Background color (RGB).
        color: Vec3,
        /// Background strength multiplier.
        strength: f32,
    },
    /// Any node shape the exporter does not capture.
    Unknown,
}

impl ShaderNode {
    /// Create an emission node.
    pub fn emission(color: Vec3, strength: f32) -> Self {
        Self::Emission { color, strength }
    }

    /// Create a background node.
    pub fn background(color: Vec3, strength: f32) -> Self {
        Self::Background { color, strength }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_constructor() {
        let node = ShaderNode::emission(Vec3::ONE, 2.0);
        assert_eq!(
            node,
            ShaderNode::Emission {
                color: Vec3::ONE,
                strength: 2.0
            }
        );
    }
}
