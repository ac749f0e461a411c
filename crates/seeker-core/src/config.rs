//! Tunables for the seeker.
//!
//! Every constant that shapes behavior lives here so a level can retune the
//! seeker without touching code. Angles are stored in degrees to keep config
//! files readable.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeekerConfig {
    pub perception: PerceptionConfig,
    pub movement: MovementConfig,
    pub behavior: BehaviorConfig,
    pub doors: DoorConfig,
    pub debug: DebugConfig,
}

impl SeekerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.perception.validate()?;
        self.movement.validate()?;
        self.behavior.validate()?;
        self.doors.validate()?;
        self.debug.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PerceptionConfig {
    /// Targets farther than this (eye to eye) are never seen.
    pub view_distance: f32,
    /// Full horizontal field of view.
    pub fov_degrees: f32,
    /// Eye height of the seeker above its ground position.
    pub eye_height_agent: f32,
    /// Target eye height above ground when standing.
    pub eye_height_target: f32,
    /// Target eye height above ground when crouching.
    pub eye_height_target_crouch: f32,
    /// Target heights above ground below this count as crouching.
    pub crouch_threshold: f32,
    /// Occluder hits lower than `target_eye - margin` are clutter and do not block.
    pub low_occluder_margin: f32,
    /// Hits within this distance of the target are treated as the target itself.
    pub hit_epsilon: f32,
    /// How long a positive sighting survives a failed occlusion test.
    pub see_hold_duration: f32,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            view_distance: 14.0,
            fov_degrees: 60.0,
            eye_height_agent: 1.55,
            eye_height_target: 1.55,
            eye_height_target_crouch: 1.05,
            crouch_threshold: 1.35,
            low_occluder_margin: 0.55,
            hit_epsilon: 0.15,
            see_hold_duration: 0.25,
        }
    }
}

impl PerceptionConfig {
    pub fn half_fov(&self) -> f32 {
        self.fov_degrees.to_radians() * 0.5
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("perception.view_distance", self.view_distance)?;
        angle("perception.fov_degrees", self.fov_degrees)?;
        non_negative("perception.eye_height_agent", self.eye_height_agent)?;
        non_negative("perception.eye_height_target", self.eye_height_target)?;
        non_negative("perception.eye_height_target_crouch", self.eye_height_target_crouch)?;
        finite("perception.crouch_threshold", self.crouch_threshold)?;
        non_negative("perception.low_occluder_margin", self.low_occluder_margin)?;
        non_negative("perception.hit_epsilon", self.hit_epsilon)?;
        non_negative("perception.see_hold_duration", self.see_hold_duration)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementConfig {
    /// Units per second.
    pub move_speed: f32,
    /// XZ radius of the collision cylinder.
    pub radius: f32,
    /// Colliders are considered when the seeker's Y is within this distance of their vertical extent.
    pub collision_band: f32,
    /// Vertical drift from ground larger than this snaps back before stepping.
    pub max_y_step: f32,
    /// XZ distance at which a waypoint counts as reached.
    pub arrive_radius: f32,
    /// Per-tick XZ displacement below this counts as not moving.
    pub stuck_epsilon: f32,
    /// Continuous time without moving before a detour is picked.
    pub stuck_duration: f32,
    /// Candidate rotations away from the goal direction, in evaluation order.
    pub detour_angles_degrees: Vec<f32>,
    /// Distance from the seeker to each detour candidate.
    pub detour_length: f32,
    /// Seconds a committed detour overrides the goal.
    pub detour_lifetime: f32,
    /// Best candidate must score strictly above this to be committed.
    pub detour_floor: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            radius: 0.35,
            collision_band: 1.5,
            max_y_step: 0.35,
            arrive_radius: 0.45,
            stuck_epsilon: 0.005,
            stuck_duration: 0.25,
            detour_angles_degrees: vec![90.0, -90.0, 45.0, -45.0, 135.0, -135.0, 30.0, -30.0],
            detour_length: 2.0,
            detour_lifetime: 1.2,
            detour_floor: -100.0,
        }
    }
}

impl MovementConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("movement.move_speed", self.move_speed)?;
        positive("movement.radius", self.radius)?;
        non_negative("movement.collision_band", self.collision_band)?;
        non_negative("movement.max_y_step", self.max_y_step)?;
        positive("movement.arrive_radius", self.arrive_radius)?;
        non_negative("movement.stuck_epsilon", self.stuck_epsilon)?;
        non_negative("movement.stuck_duration", self.stuck_duration)?;
        for &a in &self.detour_angles_degrees {
            finite("movement.detour_angles_degrees", a)?;
        }
        positive("movement.detour_length", self.detour_length)?;
        positive("movement.detour_lifetime", self.detour_lifetime)?;
        finite("movement.detour_floor", self.detour_floor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorConfig {
    /// Seconds spent on one patrol waypoint before giving up on it.
    pub patrol_timeout: f32,
    pub search_radius: f32,
    pub search_point_count: usize,
    /// Seconds in SEARCH before returning to the route.
    pub search_time_limit: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            patrol_timeout: 5.0,
            search_radius: 5.0,
            search_point_count: 10,
            search_time_limit: 4.0,
        }
    }
}

impl BehaviorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("behavior.patrol_timeout", self.patrol_timeout)?;
        non_negative("behavior.search_radius", self.search_radius)?;
        if self.search_point_count == 0 {
            return Err(ConfigError::NoSearchPoints);
        }
        non_negative("behavior.search_time_limit", self.search_time_limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DoorConfig {
    /// Closed doors within this XZ distance may be opened.
    pub open_distance: f32,
    /// Full forward cone in which a door may be opened.
    pub open_fov_degrees: f32,
    /// Search radius for the nearest-closed-door query.
    pub stuck_door_distance: f32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            open_distance: 1.6,
            open_fov_degrees: 110.0,
            stuck_door_distance: 3.0,
        }
    }
}

impl DoorConfig {
    pub fn half_open_fov(&self) -> f32 {
        self.open_fov_degrees.to_radians() * 0.5
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("doors.open_distance", self.open_distance)?;
        angle("doors.open_fov_degrees", self.open_fov_degrees)?;
        non_negative("doors.stuck_door_distance", self.stuck_door_distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebugConfig {
    /// Radius of the ground wedge drawn under the seeker.
    pub sector_range: f32,
    pub sector_segments: u32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            sector_range: 5.0,
            sector_segments: 48,
        }
    }
}

impl DebugConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("debug.sector_range", self.sector_range)
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn angle(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value <= 360.0 {
        Ok(())
    } else {
        Err(ConfigError::AngleOutOfRange { field, value })
    }
}
