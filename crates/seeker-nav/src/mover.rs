use glam::Vec3;
use seeker_core::geom::{distance_squared_xz, flat_direction};
use seeker_core::{Collider, MovementConfig};

use crate::{pick_detour, resolve_collisions, Detour, DetourCandidate};

/// What one [`Mover::step_toward`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepOutcome {
    /// XZ distance actually travelled after collision push-out.
    pub displacement: f32,
    /// The goal shared the seeker's XZ position, so nothing moved.
    pub skipped: bool,
    /// Push-outs applied this step, summed over sub-steps.
    pub pushes: usize,
    /// Set when the stall timer fired and a detour was committed.
    pub detour: Option<DetourCandidate>,
    /// Set when the stall timer fired, whether or not a detour was committed.
    pub stalled: bool,
}

/// Ground-pinned kinematic body for the seeker.
///
/// Holds position, yaw-only facing, the tracked ground height, the stall
/// timer and an optional [`Detour`].
#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    position: Vec3,
    forward: Vec3,
    ground_y: f32,
    stuck_time: f32,
    detour: Option<Detour>,
    config: MovementConfig,
}

impl Mover {
    /// Start at `position`, facing +Z, with ground height taken from `position.y`.
    pub fn new(position: Vec3, config: MovementConfig) -> Self {
        Self {
            position,
            forward: Vec3::Z,
            ground_y: position.y,
            stuck_time: 0.0,
            detour: None,
            config,
        }
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport on XZ; Y is pinned to the tracked ground. Clears stall state.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = Vec3::new(position.x, self.ground_y, position.z);
        self.stuck_time = 0.0;
        self.detour = None;
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Face along `forward` projected to the ground. Degenerate input is ignored.
    pub fn set_forward(&mut self, forward: Vec3) {
        if let Some(flat) = seeker_core::geom::normalize_flat(forward) {
            self.forward = flat;
        }
    }

    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    /// Change the tracked ground height and move onto it.
    pub fn set_ground_y(&mut self, ground_y: f32) {
        self.ground_y = ground_y;
        self.position.y = ground_y;
    }

    pub fn detour(&self) -> Option<&Detour> {
        self.detour.as_ref()
    }

    pub fn clear_detour(&mut self) {
        self.detour = None;
    }

    pub fn stuck_time(&self) -> f32 {
        self.stuck_time
    }

    /// Whether the seeker's XZ position is within `arrive_radius` of `target`.
    pub fn reached(&self, target: Vec3) -> bool {
        reached(self.position, target, self.config.arrive_radius)
    }

    /// Advance at most `move_speed * dt` toward `target` (or the live detour).
    ///
    /// Long steps are split into sub-steps no longer than half the radius,
    /// each followed by collision push-out, so a slow frame cannot carry the
    /// centre across a thin collider.
    pub fn step_toward(&mut self, target: Vec3, colliders: &[Collider], dt: f32) -> StepOutcome {
        if (self.position.y - self.ground_y).abs() > self.config.max_y_step {
            self.position.y = self.ground_y;
        }

        let goal = match self.detour.as_mut() {
            Some(detour) => {
                let goal = detour.target();
                if !detour.tick(dt) {
                    self.detour = None;
                }
                goal
            }
            None => target,
        };

        let Some(dir) = flat_direction(self.position, goal) else {
            return StepOutcome {
                skipped: true,
                ..StepOutcome::default()
            };
        };

        let before = self.position;
        let distance = self.config.move_speed * dt;
        let substeps = substep_count(distance, self.config.radius);
        let step = dir * (distance / substeps as f32);
        let mut pushes = 0;
        for _ in 0..substeps {
            self.position += step;
            pushes += resolve_collisions(
                &mut self.position,
                self.config.radius,
                self.config.collision_band,
                colliders,
            );
        }
        self.position.y = self.ground_y;
        self.forward = flat_direction(self.position, goal).unwrap_or(dir);

        let displacement = distance_squared_xz(before, self.position).sqrt();
        if displacement < self.config.stuck_epsilon {
            self.stuck_time += dt;
        } else {
            self.stuck_time = 0.0;
        }

        let mut outcome = StepOutcome {
            displacement,
            skipped: false,
            pushes,
            detour: None,
            stalled: false,
        };

        if self.stuck_time > self.config.stuck_duration {
            self.stuck_time = 0.0;
            outcome.stalled = true;
            if let Some((detour, candidate)) = pick_detour(self.position, goal, colliders, &self.config) {
                tracing::debug!(
                    score = candidate.score,
                    angle = candidate.angle_degrees,
                    x = candidate.position.x,
                    z = candidate.position.z,
                    "detour picked"
                );
                self.detour = Some(detour);
                outcome.detour = Some(candidate);
            }
        }

        outcome
    }
}

/// Upper bound on sub-steps per call.
pub const MAX_SUBSTEPS: usize = 256;

/// Sub-steps needed to keep each one within half of `radius`.
fn substep_count(distance: f32, radius: f32) -> usize {
    let max_len = radius * 0.5;
    if !(distance.is_finite() && distance > 0.0 && max_len > 0.0) {
        return 1;
    }
    ((distance / max_len).ceil() as usize).clamp(1, MAX_SUBSTEPS)
}

/// XZ arrival test.
pub fn reached(position: Vec3, target: Vec3, arrive_radius: f32) -> bool {
    distance_squared_xz(position, target) < arrive_radius * arrive_radius
}
