use glam::Vec3;
use seeker_core::{Aabb, Collider};

/// Push `position` out of every collider its cylinder overlaps on the XZ plane.
///
/// Each collider is resolved once against the current position, in slice
/// order. With several simultaneous contacts some overlap may remain; it is
/// worked off over the following ticks. Ceilings are skipped, as are
/// colliders whose vertical extent (grown by `band`) does not contain
/// `position.y`. A centre inside a footprint is pushed out through the
/// nearest side, unless the box tops out at or below `position.y` (floors).
///
/// Returns the number of colliders that pushed.
pub fn resolve_collisions(position: &mut Vec3, radius: f32, band: f32, colliders: &[Collider]) -> usize {
    let radius = radius.max(0.0);
    let mut pushes = 0;

    for collider in colliders {
        if collider.is_ceiling || !collider.aabb.overlaps_band(position.y, band) {
            continue;
        }

        let closest = collider.aabb.closest_point_xz(*position);
        let dx = position.x - closest.x;
        let dz = position.z - closest.y;
        let dist2 = dx * dx + dz * dz;
        if dist2 >= radius * radius {
            continue;
        }
        if dist2 <= f32::EPSILON * f32::EPSILON {
            if collider.aabb.max.y > position.y {
                push_out_of_footprint(position, radius, &collider.aabb);
                pushes += 1;
            }
            continue;
        }

        let dist = dist2.sqrt();
        let push = radius - dist;
        position.x += dx / dist * push;
        position.z += dz / dist * push;
        pushes += 1;
    }

    pushes
}

/// Move a centre lying inside `aabb`'s footprint across its shallowest side, `radius` clear of it.
fn push_out_of_footprint(position: &mut Vec3, radius: f32, aabb: &Aabb) {
    let sides = [
        (position.x - aabb.min.x, Vec3::new(aabb.min.x - radius, position.y, position.z)),
        (aabb.max.x - position.x, Vec3::new(aabb.max.x + radius, position.y, position.z)),
        (position.z - aabb.min.z, Vec3::new(position.x, position.y, aabb.min.z - radius)),
        (aabb.max.z - position.z, Vec3::new(position.x, position.y, aabb.max.z + radius)),
    ];
    let mut best = sides[0];
    for side in &sides[1..] {
        if side.0 < best.0 {
            best = *side;
        }
    }
    *position = best.1;
}
