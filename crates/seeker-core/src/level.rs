//! Records supplied by the level collaborator.
//!
//! The seeker reads colliders and anchors and may flip a door open; it never
//! owns any of these.

use glam::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Aabb;

/// Axis-aligned blocker used for movement push-out and, when static, for line of sight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Collider {
    #[cfg_attr(feature = "serde", serde(rename = "box"))]
    pub aabb: Aabb,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Ceilings only stop upward motion; they never push the seeker sideways.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_ceiling: bool,
}

impl Collider {
    pub fn new(name: impl Into<String>, aabb: Aabb) -> Self {
        Self {
            aabb,
            name: name.into(),
            is_ceiling: false,
        }
    }

    pub fn ceiling(name: impl Into<String>, aabb: Aabb) -> Self {
        Self {
            aabb,
            name: name.into(),
            is_ceiling: true,
        }
    }
}

/// Shared door state.
///
/// `angle` is driven by the host's door animation toward the pose implied by
/// `is_open`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Door {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub position: Vec3,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_open: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub angle: f32,
}

impl Door {
    pub fn closed(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
            is_open: false,
            angle: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorRole {
    /// `AI_SPAWN*`: where the seeker starts.
    SeekerSpawn,
    /// `AI_PATROL*`: patrol waypoint.
    Patrol,
    /// `AI_GUARD*`: guard post (reserved for level authoring).
    Guard,
    /// `SPAWN`: where the player starts.
    PlayerSpawn,
    Other,
}

/// Named world-space marker placed in level data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Anchor {
    pub name: String,
    pub position: Vec3,
}

impl Anchor {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    /// Role derived from the name prefix (authoring tools append `.001` style suffixes).
    pub fn role(&self) -> AnchorRole {
        let name = self.name.as_str();
        if name.starts_with("AI_SPAWN") {
            AnchorRole::SeekerSpawn
        } else if name.starts_with("AI_PATROL") {
            AnchorRole::Patrol
        } else if name.starts_with("AI_GUARD") {
            AnchorRole::Guard
        } else if name == "SPAWN" {
            AnchorRole::PlayerSpawn
        } else {
            AnchorRole::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_roles_follow_name_prefix() {
        let role = |n: &str| Anchor::new(n, Vec3::ZERO).role();
        assert_eq!(role("AI_SPAWN.001"), AnchorRole::SeekerSpawn);
        assert_eq!(role("AI_PATROL_03"), AnchorRole::Patrol);
        assert_eq!(role("AI_GUARD"), AnchorRole::Guard);
        assert_eq!(role("SPAWN"), AnchorRole::PlayerSpawn);
        assert_eq!(role("SPAWN_B"), AnchorRole::Other);
        assert_eq!(role("EMPTY_NAMES"), AnchorRole::Other);
    }
}
