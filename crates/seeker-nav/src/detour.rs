//! Greedy local detours.
//!
//! When the seeker stalls it rotates its goal direction by a fixed fan of
//! angles, scores a point a short distance along each, and commits the best
//! one for a moment. O(candidates × colliders) per stall, no search.

use glam::Vec3;
use seeker_core::geom::{distance_squared_xz, flat_direction, rotate_y};
use seeker_core::{Collider, MovementConfig};

pub const BASELINE_SCORE: f32 = 100.0;
/// Footprint growth used when testing whether a candidate sits inside a collider.
pub const INSIDE_MARGIN: f32 = 0.1;
pub const INSIDE_PENALTY: f32 = 50.0;
/// Candidates closer than this to a collider lose `(NEAR_DISTANCE - d) * NEAR_PENALTY`.
pub const NEAR_DISTANCE: f32 = 1.0;
pub const NEAR_PENALTY: f32 = 20.0;
/// Bonus for staying close to the goal: `max(0, GOAL_BONUS - GOAL_FALLOFF * distance)`.
pub const GOAL_BONUS: f32 = 30.0;
pub const GOAL_FALLOFF: f32 = 2.0;

/// Short-lived waypoint override. Remaining lifetime is always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detour {
    target: Vec3,
    remaining: f32,
}

impl Detour {
    pub fn new(target: Vec3, lifetime: f32) -> Option<Self> {
        if lifetime.is_finite() && lifetime > 0.0 {
            Some(Self {
                target,
                remaining: lifetime,
            })
        } else {
            None
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Count down by `dt`. Returns `false` once the detour has expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetourCandidate {
    pub position: Vec3,
    pub score: f32,
    pub angle_degrees: f32,
}

/// Score a candidate point: high when clear of colliders and still near the goal.
///
/// Only colliders that could block movement at the candidate's height count,
/// i.e. non-ceilings whose vertical extent grown by `band` contains `candidate.y`.
pub fn evaluate_position(candidate: Vec3, goal: Vec3, colliders: &[Collider], band: f32) -> f32 {
    let mut score = BASELINE_SCORE;

    for collider in colliders {
        if collider.is_ceiling || !collider.aabb.overlaps_band(candidate.y, band) {
            continue;
        }

        if collider.aabb.contains_xz(candidate, INSIDE_MARGIN) {
            score -= INSIDE_PENALTY;
        } else {
            let dist = collider.aabb.distance_xz(candidate);
            if dist < NEAR_DISTANCE {
                score -= (NEAR_DISTANCE - dist) * NEAR_PENALTY;
            }
        }
    }

    let dist_to_goal = distance_squared_xz(candidate, goal).sqrt();
    score + (GOAL_BONUS - dist_to_goal * GOAL_FALLOFF).max(0.0)
}

/// Score every candidate in the configured angle order.
///
/// Empty when the goal shares the seeker's XZ position.
pub fn score_candidates(
    position: Vec3,
    goal: Vec3,
    colliders: &[Collider],
    config: &MovementConfig,
) -> Vec<DetourCandidate> {
    let Some(to_goal) = flat_direction(position, goal) else {
        return Vec::new();
    };

    config
        .detour_angles_degrees
        .iter()
        .map(|&angle_degrees| {
            let dir = rotate_y(to_goal, angle_degrees.to_radians());
            let candidate = position + dir * config.detour_length;
            DetourCandidate {
                position: candidate,
                score: evaluate_position(candidate, goal, colliders, config.collision_band),
                angle_degrees,
            }
        })
        .collect()
}

/// Pick the best-scoring candidate and wrap it as a [`Detour`].
///
/// Ties go to the earlier angle. Nothing is committed when the best score is
/// not strictly above `config.detour_floor`.
pub fn pick_detour(
    position: Vec3,
    goal: Vec3,
    colliders: &[Collider],
    config: &MovementConfig,
) -> Option<(Detour, DetourCandidate)> {
    let mut best: Option<DetourCandidate> = None;
    for candidate in score_candidates(position, goal, colliders, config) {
        if best.map_or(true, |b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    let best = best?;
    if best.score <= config.detour_floor {
        return None;
    }
    let detour = Detour::new(best.position, config.detour_lifetime)?;
    Some((detour, best))
}
