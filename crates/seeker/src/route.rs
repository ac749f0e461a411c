use glam::Vec3;
use seeker_core::geom::distance_squared_xz;
use seeker_core::{Anchor, AnchorRole};

/// Cyclic list of patrol waypoints, all at ground height.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatrolRoute {
    points: Vec<Vec3>,
}

impl PatrolRoute {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// `AI_PATROL*` anchors ordered by name, with Y replaced by `ground_y`.
    pub fn from_anchors(anchors: &[Anchor], ground_y: f32) -> Self {
        let mut patrol: Vec<&Anchor> = anchors
            .iter()
            .filter(|a| a.role() == AnchorRole::Patrol)
            .collect();
        patrol.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            points: patrol
                .into_iter()
                .map(|a| Vec3::new(a.position.x, ground_y, a.position.z))
                .collect(),
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    /// Index after `index`, wrapping. Zero for an empty route.
    pub fn next_index(&self, index: usize) -> usize {
        if self.points.is_empty() {
            0
        } else {
            (index + 1) % self.points.len()
        }
    }

    /// Waypoint closest to `position` by squared XZ distance. Ties go to the earlier point.
    pub fn nearest(&self, position: Vec3) -> Option<usize> {
        let mut best = None;
        let mut best_d2 = f32::INFINITY;
        for (i, &p) in self.points.iter().enumerate() {
            let d2 = distance_squared_xz(position, p);
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(i);
            }
        }
        best
    }
}

/// Position of the first `AI_SPAWN*` anchor, in list order.
pub fn spawn_point(anchors: &[Anchor]) -> Option<Vec3> {
    anchors
        .iter()
        .find(|a| a.role() == AnchorRole::SeekerSpawn)
        .map(|a| a.position)
}
