//! Behavior state and its transitions.
//!
//! Holds what the state machine remembers between ticks. The per-state
//! update logic lives on [`crate::SeekerAgent`], which owns the mover and
//! the route this state refers to.

use core::f32::consts::TAU;

use glam::Vec3;
use seeker_core::SeekerState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BehaviorState {
    pub state: SeekerState,
    /// Current patrol waypoint. Kept below the route length while the route is non-empty.
    pub patrol_index: usize,
    pub patrol_timer: f32,
    /// Ground-pinned position where the target was last seen.
    pub last_seen: Vec3,
    pub search_points: Vec<Vec3>,
    pub search_index: usize,
    pub search_timer: f32,
}

impl BehaviorState {
    /// Switch to CHASE, remembering where the target was. Returns the previous state.
    pub fn enter_chase(&mut self, last_seen: Vec3) -> SeekerState {
        self.last_seen = last_seen;
        self.switch(SeekerState::Chase)
    }

    /// Switch to SEARCH around `last_seen` with a fresh ring and timer.
    pub fn enter_search(&mut self, points: Vec<Vec3>) -> SeekerState {
        self.search_points = points;
        self.search_index = 0;
        self.search_timer = 0.0;
        self.switch(SeekerState::Search)
    }

    pub fn enter_return(&mut self) -> SeekerState {
        self.switch(SeekerState::Return)
    }

    pub fn enter_patrol(&mut self) -> SeekerState {
        self.switch(SeekerState::Patrol)
    }

    /// Next search point not yet visited.
    pub fn current_search_point(&self) -> Option<Vec3> {
        self.search_points.get(self.search_index).copied()
    }

    fn switch(&mut self, next: SeekerState) -> SeekerState {
        core::mem::replace(&mut self.state, next)
    }
}

/// `count` points evenly spaced on a circle of `radius` around `center`, at `ground_y`.
///
/// Point `i` sits at angle `i / count * 2π`, measured from +X toward +Z.
pub fn search_ring(center: Vec3, radius: f32, count: usize, ground_y: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let a = i as f32 / count as f32 * TAU;
            Vec3::new(center.x + a.cos() * radius, ground_y, center.z + a.sin() * radius)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_points_are_on_the_circle_in_order() {
        let ring = search_ring(Vec3::new(1.0, 9.0, -2.0), 5.0, 4, 0.5);
        assert_eq!(ring.len(), 4);
        assert!((ring[0] - Vec3::new(6.0, 0.5, -2.0)).length() < 1e-5);
        assert!((ring[1] - Vec3::new(1.0, 0.5, 3.0)).length() < 1e-5);
        assert!((ring[2] - Vec3::new(-4.0, 0.5, -2.0)).length() < 1e-5);
    }

    #[test]
    fn entering_search_resets_progress() {
        let mut b = BehaviorState {
            search_index: 3,
            search_timer: 2.0,
            ..BehaviorState::default()
        };
        b.enter_chase(Vec3::X);
        let prev = b.enter_search(vec![Vec3::ZERO]);
        assert_eq!(prev, SeekerState::Chase);
        assert_eq!(b.state, SeekerState::Search);
        assert_eq!((b.search_index, b.search_timer), (0, 0.0));
        assert_eq!(b.current_search_point(), Some(Vec3::ZERO));
    }
}
