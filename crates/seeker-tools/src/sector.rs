//! Ground wedge showing what the seeker can see.
//!
//! The mesh is built once in local space (apex at the origin, opening toward
//! +Z) and posed every frame from the seeker's position and facing. It reads
//! agent state and never feeds back into it.

use glam::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use seeker_core::geom::{normalize_flat, yaw_of};

/// Height above ground at which the wedge is drawn, to avoid z-fighting.
pub const SECTOR_LIFT: f32 = 0.02;
pub const SECTOR_OPACITY_SEEING: f32 = 0.32;
pub const SECTOR_OPACITY_IDLE: f32 = 0.18;

/// Triangle fan: vertex 0 is the apex, followed by `segments + 1` arc vertices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroundSector {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl GroundSector {
    /// Wedge spanning `fov` radians with radius `range`. `segments` is clamped to at least 1.
    pub fn new(fov: f32, range: f32, segments: u32) -> Self {
        let segments = segments.max(1);
        let half = fov * 0.5;

        let mut positions = Vec::with_capacity(segments as usize + 2);
        positions.push([0.0, 0.0, 0.0]);
        for i in 0..=segments {
            let t = i as f32 / segments as f32;
            let a = -half + t * fov;
            positions.push([a.sin() * range, 0.0, a.cos() * range]);
        }

        let mut indices = Vec::with_capacity(segments as usize * 3);
        for i in 1..=segments {
            indices.extend_from_slice(&[0, i, i + 1]);
        }

        Self { positions, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Per-frame placement of the wedge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectorPose {
    pub position: Vec3,
    /// Rotation about +Y, measured from +Z toward +X.
    pub yaw: f32,
    pub opacity: f32,
}

impl SectorPose {
    pub fn from_agent(position: Vec3, forward: Vec3, ground_y: f32, seeing: bool) -> Self {
        let yaw = normalize_flat(forward).map(yaw_of).unwrap_or(0.0);
        Self {
            position: Vec3::new(position.x, ground_y + SECTOR_LIFT, position.z),
            yaw,
            opacity: if seeing {
                SECTOR_OPACITY_SEEING
            } else {
                SECTOR_OPACITY_IDLE
            },
        }
    }

    /// Local wedge vertex to world space.
    pub fn transform(&self, local: [f32; 3]) -> Vec3 {
        let (sin, cos) = self.yaw.sin_cos();
        let [x, y, z] = local;
        self.position + Vec3::new(x * cos + z * sin, y, z * cos - x * sin)
    }
}
