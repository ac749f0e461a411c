use glam::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Collider, Door};

/// Snapshot of the pursued entity, taken fresh each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetSnapshot {
    /// Eye/camera position of the target.
    pub position: Vec3,
}

impl TargetSnapshot {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    pub fn height_above(&self, ground_y: f32) -> f32 {
        self.position.y - ground_y
    }
}

/// Read-only view of the level, as the seeker needs it each tick.
///
/// The trait intentionally mirrors what a scene host already tracks; it does
/// not prescribe how colliders are stored or refreshed.
pub trait SeekerWorldView {
    /// Every movement blocker for this tick, static and dynamic (doors already moved).
    fn colliders(&self) -> &[Collider];

    /// Static level geometry used for line of sight.
    ///
    /// `None` until the level has finished loading.
    fn level_geometry(&self) -> Option<&[Collider]>;

    fn doors(&self) -> &[Door];

    /// The pursued entity, if one exists this tick.
    fn target(&self) -> Option<TargetSnapshot>;
}

/// Write access. The only mutation the seeker performs on the world is opening doors.
pub trait SeekerWorldMut: SeekerWorldView {
    fn open_door(&mut self, index: usize);
}
