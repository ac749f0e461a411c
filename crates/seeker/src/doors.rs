//! Door interaction.
//!
//! The seeker opens a closed door that is close and roughly in front of it.
//! It never closes doors and never touches their animation.

use glam::Vec3;
use seeker_core::geom::{angle_between_flat, distance_squared_xz, flat_direction};
use seeker_core::{Door, DoorConfig};

/// Index of the nearest closed door within `open_distance` (XZ) and
/// `open_fov_degrees / 2` of `forward`, if any.
pub fn try_auto_open_door(position: Vec3, forward: Vec3, doors: &[Door], config: &DoorConfig) -> Option<usize> {
    let max_d2 = config.open_distance * config.open_distance;
    let half_fov = config.half_open_fov();

    let mut best = None;
    let mut best_d2 = f32::INFINITY;
    for (i, door) in doors.iter().enumerate() {
        if door.is_open {
            continue;
        }
        let d2 = distance_squared_xz(position, door.position);
        if d2 > max_d2 {
            continue;
        }
        let Some(dir) = flat_direction(position, door.position) else {
            continue;
        };
        let Some(angle) = angle_between_flat(forward, dir) else {
            continue;
        };
        if angle <= half_fov && d2 < best_d2 {
            best_d2 = d2;
            best = Some(i);
        }
    }
    best
}

/// Index of the nearest closed door within `max_distance` (XZ), regardless of facing.
pub fn nearest_closed_door(position: Vec3, doors: &[Door], max_distance: f32) -> Option<usize> {
    let max_d2 = max_distance * max_distance;
    let mut best = None;
    let mut best_d2 = f32::INFINITY;
    for (i, door) in doors.iter().enumerate() {
        if door.is_open {
            continue;
        }
        let d2 = distance_squared_xz(position, door.position);
        if d2 < best_d2 && d2 <= max_d2 {
            best_d2 = d2;
            best = Some(i);
        }
    }
    best
}
