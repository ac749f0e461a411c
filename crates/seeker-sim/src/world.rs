use core::f32::consts::FRAC_PI_4;

use glam::Vec3;
use seeker_core::geom::distance_squared_xz;
use seeker_core::{Aabb, Collider, Door, SeekerWorldMut, SeekerWorldView, TargetSnapshot};

use crate::level::{LevelFile, TargetScript};

/// Fully open door angle, radians.
pub const DOOR_OPEN_ANGLE: f32 = -core::f32::consts::FRAC_PI_2;
/// Door swing speed, radians per second.
pub const DOOR_SPEED: f32 = 2.5;

/// Target that walks a waypoint loop at constant speed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedTarget {
    script: TargetScript,
    position: Option<Vec3>,
    next: usize,
    elapsed_ticks: u64,
}

impl ScriptedTarget {
    pub fn new(script: TargetScript) -> Self {
        Self {
            position: None,
            next: 1,
            elapsed_ticks: 0,
            script,
        }
    }

    pub fn position(&self) -> Option<Vec3> {
        self.position
    }

    pub fn advance(&mut self, dt: f32) {
        let waypoints = &self.script.waypoints;
        if waypoints.is_empty() {
            return;
        }

        self.elapsed_ticks += 1;
        if self.elapsed_ticks <= self.script.appear_after {
            return;
        }

        let Some(mut pos) = self.position else {
            self.position = Some(waypoints[0]);
            return;
        };

        let mut budget = self.script.speed * dt;
        let mut legs = 0;
        while budget > 0.0 && legs <= waypoints.len() {
            if self.next >= waypoints.len() {
                if !self.script.looping {
                    break;
                }
                self.next = 0;
            }
            let goal = waypoints[self.next];
            let to_goal = goal - pos;
            let len = to_goal.length();
            if len <= budget {
                pos = goal;
                budget -= len;
                self.next += 1;
                legs += 1;
            } else {
                pos += to_goal / len * budget;
                budget = 0.0;
            }
        }
        self.position = Some(pos);
    }
}

/// In-memory level: static boxes, animated doors, and a scripted target.
#[derive(Debug, Clone)]
pub struct SimWorld {
    static_colliders: Vec<Collider>,
    doors: Vec<Door>,
    blockers: Vec<Option<Aabb>>,
    colliders: Vec<Collider>,
    target: ScriptedTarget,
    loaded: bool,
}

impl SimWorld {
    pub fn from_level(level: &LevelFile) -> Self {
        let mut world = Self {
            static_colliders: level.colliders.clone(),
            doors: level
                .doors
                .iter()
                .map(|d| Door {
                    name: d.name.clone(),
                    position: d.position,
                    is_open: d.is_open,
                    angle: if d.is_open { DOOR_OPEN_ANGLE } else { 0.0 },
                })
                .collect(),
            blockers: level.doors.iter().map(|d| d.blocker).collect(),
            colliders: Vec::new(),
            target: ScriptedTarget::new(level.target.clone()),
            loaded: true,
        };
        world.rebuild_colliders();
        world
    }

    /// Pretend the level is still streaming in; line-of-sight geometry is withheld.
    pub fn set_loaded(&mut self, loaded: bool) {
        self.loaded = loaded;
    }

    /// Advance host-side simulation: door swing, dynamic colliders, target script.
    pub fn step(&mut self, dt: f32) {
        for door in &mut self.doors {
            let goal = if door.is_open { DOOR_OPEN_ANGLE } else { 0.0 };
            let diff = goal - door.angle;
            let max_step = DOOR_SPEED * dt;
            if diff.abs() <= max_step {
                door.angle = goal;
            } else {
                door.angle += diff.signum() * max_step;
            }
        }
        self.rebuild_colliders();
        self.target.advance(dt);
    }

    pub fn target_position(&self) -> Option<Vec3> {
        self.target.position()
    }

    /// XZ distance from `position` to the target, if there is one.
    pub fn distance_to_target(&self, position: Vec3) -> Option<f32> {
        self.target
            .position()
            .map(|t| distance_squared_xz(position, t).sqrt())
    }

    pub fn doors_opened(&self) -> usize {
        self.doors.iter().filter(|d| d.is_open).count()
    }

    /// Doorway blocker still in place: the door has swung less than halfway.
    fn blocks(door: &Door) -> bool {
        door.angle.abs() < FRAC_PI_4
    }

    fn rebuild_colliders(&mut self) {
        self.colliders.clear();
        self.colliders.extend(self.static_colliders.iter().cloned());
        for (door, blocker) in self.doors.iter().zip(&self.blockers) {
            if let Some(aabb) = blocker {
                if Self::blocks(door) {
                    self.colliders.push(Collider::new(door.name.clone(), *aabb));
                }
            }
        }
    }
}

impl SeekerWorldView for SimWorld {
    fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    fn level_geometry(&self) -> Option<&[Collider]> {
        self.loaded.then_some(self.static_colliders.as_slice())
    }

    fn doors(&self) -> &[Door] {
        &self.doors
    }

    fn target(&self) -> Option<TargetSnapshot> {
        self.target.position().map(TargetSnapshot::new)
    }
}

impl SeekerWorldMut for SimWorld {
    fn open_door(&mut self, index: usize) {
        if let Some(door) = self.doors.get_mut(index) {
            door.is_open = true;
        }
    }
}
