//! Geometry helpers shared by perception and movement.
//!
//! Everything the seeker does happens on the horizontal XZ plane except the
//! line-of-sight ray, so most helpers here flatten their inputs first.

use glam::{Vec2, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vectors shorter than this are treated as having no direction.
pub const DIRECTION_EPSILON: f32 = 1e-4;

const PARALLEL_EPSILON: f32 = 1e-8;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Whether `y` lies within the box's vertical extent grown by `band` on both ends.
    pub fn overlaps_band(&self, y: f32, band: f32) -> bool {
        y >= self.min.y - band && y <= self.max.y + band
    }

    /// Whether `p` lies inside the XZ footprint grown by `margin`.
    pub fn contains_xz(&self, p: Vec3, margin: f32) -> bool {
        p.x >= self.min.x - margin
            && p.x <= self.max.x + margin
            && p.z >= self.min.z - margin
            && p.z <= self.max.z + margin
    }

    /// Closest point of the XZ footprint to `p`, as `(x, z)`.
    pub fn closest_point_xz(&self, p: Vec3) -> Vec2 {
        Vec2::new(
            self.min.x.max(p.x.min(self.max.x)),
            self.min.z.max(p.z.min(self.max.z)),
        )
    }

    pub fn distance_xz(&self, p: Vec3) -> f32 {
        (Vec2::new(p.x, p.z) - self.closest_point_xz(p)).length()
    }
}

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `from` toward `to`, together with the distance between them.
    ///
    /// Returns `None` when the two points coincide.
    pub fn between(from: Vec3, to: Vec3) -> Option<(Self, f32)> {
        let delta = to - from;
        let length = delta.length();
        if !length.is_finite() || length < DIRECTION_EPSILON {
            return None;
        }
        Some((
            Self {
                origin: from,
                direction: delta / length,
            },
            length,
        ))
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to where it enters `aabb` (slab method).
    ///
    /// Faces are single sided: a ray that starts inside the box, or only
    /// touches it behind the origin, reports no hit.
    pub fn enter_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let dir = self.direction[axis];
            let (lo, hi) = (aabb.min[axis], aabb.max[axis]);

            if dir.abs() < PARALLEL_EPSILON {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t1 = (lo - origin) * inv;
            let mut t2 = (hi - origin) * inv;
            if t1 > t2 {
                core::mem::swap(&mut t1, &mut t2);
            }
            t_enter = t_enter.max(t1);
            t_exit = t_exit.min(t2);
            if t_enter > t_exit {
                return None;
            }
        }

        if t_enter < 0.0 || !t_enter.is_finite() {
            None
        } else {
            Some(t_enter)
        }
    }
}

/// Drop the vertical component.
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

pub fn distance_squared_xz(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    dx * dx + dz * dz
}

/// Unit horizontal direction from `from` to `to`, or `None` if they share XZ.
pub fn flat_direction(from: Vec3, to: Vec3) -> Option<Vec3> {
    normalize_flat(to - from)
}

pub fn normalize_flat(v: Vec3) -> Option<Vec3> {
    let flat = flatten(v);
    let len = flat.length();
    if !len.is_finite() || len < DIRECTION_EPSILON {
        None
    } else {
        Some(flat / len)
    }
}

/// Angle in radians between the horizontal projections of `a` and `b`.
pub fn angle_between_flat(a: Vec3, b: Vec3) -> Option<f32> {
    let a = normalize_flat(a)?;
    let b = normalize_flat(b)?;
    Some(a.dot(b).clamp(-1.0, 1.0).acos())
}

/// Rotate `v` about +Y in the XZ plane (`x' = x cos - z sin`, `z' = x sin + z cos`).
pub fn rotate_y(v: Vec3, radians: f32) -> Vec3 {
    let (sin, cos) = radians.sin_cos();
    Vec3::new(v.x * cos - v.z * sin, v.y, v.x * sin + v.z * cos)
}

/// Yaw of a forward vector, measured from +Z toward +X.
pub fn yaw_of(forward: Vec3) -> f32 {
    forward.x.atan2(forward.z)
}

pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}
