//! Crouch-aware line of sight.
//!
//! Vision is eye to eye: the seeker's eye sits at a fixed height above its
//! ground position and the target's eye height depends on whether it is
//! crouching. A sighting needs the target within range, inside the
//! horizontal field of view, and not hidden behind a box tall enough to
//! cover its eye. Low clutter (tables, crates) never blocks.

use core::fmt;

use glam::Vec3;
use seeker_core::geom::angle_between_flat;
use seeker_core::{Aabb, Collider, PerceptionConfig, Ray, TargetSnapshot};

/// Receives visible/hidden transitions. Called only when the flag flips.
pub trait SightObserver {
    fn sight_changed(&mut self, seeing: bool);
}

impl<F: FnMut(bool)> SightObserver for F {
    fn sight_changed(&mut self, seeing: bool) {
        self(seeing)
    }
}

/// Outcome of a single line-of-sight test, before see-hold is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOfSight {
    /// The level has not reported its geometry yet.
    NoGeometry,
    NoTarget,
    OutOfRange,
    OutsideFov,
    Occluded,
    Clear,
}

impl LineOfSight {
    pub fn is_clear(self) -> bool {
        matches!(self, LineOfSight::Clear)
    }
}

/// Static boxes used for line of sight. Ceilings are left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccluderSet {
    boxes: Vec<Aabb>,
}

impl OccluderSet {
    pub fn from_colliders(colliders: &[Collider]) -> Self {
        Self {
            boxes: colliders
                .iter()
                .filter(|c| !c.is_ceiling)
                .map(|c| c.aabb)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Entry distances of every box the ray enters, nearest first.
    pub fn raycast(&self, ray: &Ray) -> Vec<f32> {
        let mut hits: Vec<f32> = self.boxes.iter().filter_map(|b| ray.enter_aabb(b)).collect();
        hits.sort_by(|a, b| a.total_cmp(b));
        hits
    }
}

/// Observable perception state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerceptionState {
    pub seeing: bool,
    /// Seconds a failed occlusion test will still report visible.
    pub see_hold: f32,
}

pub struct Perception {
    config: PerceptionConfig,
    occluders: Option<OccluderSet>,
    state: PerceptionState,
    observer: Option<Box<dyn SightObserver>>,
}

impl fmt::Debug for Perception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Perception")
            .field("config", &self.config)
            .field("occluders", &self.occluders.as_ref().map(OccluderSet::len))
            .field("state", &self.state)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Perception {
    pub fn new(config: PerceptionConfig) -> Self {
        Self {
            config,
            occluders: None,
            state: PerceptionState::default(),
            observer: None,
        }
    }

    pub fn config(&self) -> &PerceptionConfig {
        &self.config
    }

    pub fn state(&self) -> PerceptionState {
        self.state
    }

    pub fn seeing(&self) -> bool {
        self.state.seeing
    }

    pub fn set_observer(&mut self, observer: Box<dyn SightObserver>) {
        self.observer = Some(observer);
    }

    pub fn occluders(&self) -> Option<&OccluderSet> {
        self.occluders.as_ref()
    }

    /// Capture the occluder set the first time geometry is available; later calls are no-ops.
    pub fn capture_occluders(&mut self, geometry: Option<&[Collider]>) {
        if self.occluders.is_some() {
            return;
        }
        if let Some(colliders) = geometry {
            let set = OccluderSet::from_colliders(colliders);
            tracing::debug!(occluders = set.len(), "captured line-of-sight geometry");
            self.occluders = Some(set);
        }
    }

    /// Replace the cached occluders, e.g. after a level reload.
    pub fn set_occluders(&mut self, occluders: Option<OccluderSet>) {
        self.occluders = occluders;
    }

    /// Count the see-hold down by one tick. Call once per update.
    pub fn decay(&mut self, dt: f32) {
        if self.state.see_hold > 0.0 {
            self.state.see_hold -= dt;
        }
    }

    /// Target eye position given the seeker's ground height.
    pub fn target_eye(&self, target: TargetSnapshot, ground_y: f32) -> Vec3 {
        let crouching = target.height_above(ground_y) < self.config.crouch_threshold;
        let eye = if crouching {
            self.config.eye_height_target_crouch
        } else {
            self.config.eye_height_target
        };
        Vec3::new(target.position.x, ground_y + eye, target.position.z)
    }

    /// Pure line-of-sight test. Does not touch see-hold or the seeing flag.
    pub fn line_of_sight(
        &self,
        position: Vec3,
        forward: Vec3,
        ground_y: f32,
        target: Option<TargetSnapshot>,
    ) -> LineOfSight {
        let Some(target) = target else {
            return LineOfSight::NoTarget;
        };

        let eye = Vec3::new(position.x, ground_y + self.config.eye_height_agent, position.z);
        let target_eye = self.target_eye(target, ground_y);

        let dist = eye.distance(target_eye);
        if !(dist <= self.config.view_distance) {
            return LineOfSight::OutOfRange;
        }

        match angle_between_flat(forward, target_eye - eye) {
            Some(angle) if angle <= self.config.half_fov() => {}
            _ => return LineOfSight::OutsideFov,
        }

        let Some(occluders) = self.occluders.as_ref() else {
            return LineOfSight::NoGeometry;
        };
        let Some((ray, _)) = Ray::between(eye, target_eye) else {
            return LineOfSight::OutsideFov;
        };

        let min_blocking_y = target_eye.y - self.config.low_occluder_margin;
        for t in occluders.raycast(&ray) {
            if t >= dist - self.config.hit_epsilon {
                break;
            }
            if ray.at(t).y >= min_blocking_y {
                return LineOfSight::Occluded;
            }
        }

        LineOfSight::Clear
    }

    /// Line-of-sight test with see-hold, updating the seeing flag.
    ///
    /// A clear test refreshes the hold. While the hold is positive an
    /// occluded test still reports visible; range and FOV failures never do.
    /// The observer fires on every flip of the flag.
    pub fn can_see_target(
        &mut self,
        position: Vec3,
        forward: Vec3,
        ground_y: f32,
        target: Option<TargetSnapshot>,
    ) -> bool {
        let visible = match self.line_of_sight(position, forward, ground_y, target) {
            LineOfSight::Clear => {
                self.state.see_hold = self.config.see_hold_duration;
                true
            }
            LineOfSight::Occluded => self.state.see_hold > 0.0,
            _ => false,
        };
        self.set_seeing(visible);
        visible
    }

    fn set_seeing(&mut self, seeing: bool) {
        if self.state.seeing == seeing {
            return;
        }
        self.state.seeing = seeing;
        if let Some(observer) = self.observer.as_mut() {
            observer.sight_changed(seeing);
        }
    }
}
