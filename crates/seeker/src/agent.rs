use core::fmt;

use glam::Vec3;
use seeker_core::{
    Anchor, Collider, ConfigError, SeekerConfig, SeekerId, SeekerState, SeekerWorldMut, TargetSnapshot, TickContext,
};
use seeker_nav::{Detour, Mover};
use seeker_tools::{GroundSector, SectorPose, TraceEvent, TraceKind, TraceSink};

use crate::behavior::{search_ring, BehaviorState};
use crate::doors::try_auto_open_door;
use crate::perception::{Perception, SightObserver};
use crate::route::{spawn_point, PatrolRoute};

/// A single pursuit agent.
///
/// Owns its perception, movement and behavior state; borrows the world only
/// for the duration of [`SeekerAgent::update`].
pub struct SeekerAgent {
    id: SeekerId,
    config: SeekerConfig,
    mover: Mover,
    perception: Perception,
    behavior: BehaviorState,
    route: PatrolRoute,
    trace: Option<Box<dyn TraceSink>>,
    tick: u64,
    warned_no_route: bool,
}

impl fmt::Debug for SeekerAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeekerAgent")
            .field("id", &self.id)
            .field("mover", &self.mover)
            .field("perception", &self.perception)
            .field("behavior", &self.behavior)
            .field("route", &self.route)
            .finish_non_exhaustive()
    }
}

impl SeekerAgent {
    /// Create an agent at `position`, which also sets its ground height.
    pub fn new(id: SeekerId, config: SeekerConfig, position: Vec3) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            id,
            mover: Mover::new(position, config.movement.clone()),
            perception: Perception::new(config.perception),
            behavior: BehaviorState::default(),
            route: PatrolRoute::default(),
            trace: None,
            tick: 0,
            warned_no_route: false,
            config,
        })
    }

    pub fn with_observer(mut self, observer: impl SightObserver + 'static) -> Self {
        self.perception.set_observer(Box::new(observer));
        self
    }

    pub fn with_trace_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.trace = Some(Box::new(sink));
        self
    }

    /// Place the agent on its spawn anchor and build the patrol route.
    ///
    /// Without an `AI_SPAWN*` anchor the agent stays put and keeps its
    /// current height as ground. Patrol points are flattened onto that ground.
    pub fn set_waypoints_from_anchors(&mut self, anchors: &[Anchor]) {
        match spawn_point(anchors) {
            Some(spawn) => {
                self.mover.set_ground_y(spawn.y);
                self.mover.set_position(spawn);
            }
            None => {
                tracing::warn!(agent = %self.id, "no spawn anchor found; keeping current position");
                let y = self.mover.position().y;
                self.mover.set_ground_y(y);
            }
        }

        self.route = PatrolRoute::from_anchors(anchors, self.mover.ground_y());
        self.reset_patrol_cursor();
        tracing::info!(agent = %self.id, points = self.route.len(), "patrol route set");
        self.warn_if_no_route();
    }

    /// Replace the patrol route with explicit points, flattened onto the agent's ground.
    pub fn set_patrol_points(&mut self, points: impl IntoIterator<Item = Vec3>) {
        let ground_y = self.mover.ground_y();
        self.route = PatrolRoute::new(points.into_iter().map(|p| Vec3::new(p.x, ground_y, p.z)).collect());
        self.reset_patrol_cursor();
    }

    /// Advance one frame.
    pub fn update<W: SeekerWorldMut + ?Sized>(&mut self, ctx: &TickContext, world: &mut W) {
        let dt = ctx.dt();
        self.tick = ctx.tick;

        self.perception.capture_occluders(world.level_geometry());
        self.perception.decay(dt);

        let target = world.target();
        match self.behavior.state {
            SeekerState::Patrol => self.update_patrol(target, world.colliders(), dt),
            SeekerState::Chase => self.update_chase(target, world.colliders(), dt),
            SeekerState::Search => self.update_search(target, world.colliders(), dt),
            SeekerState::Return => self.update_return(world.colliders(), dt),
        }

        self.try_auto_open_door(world);
    }

    /// Perception test from the agent's current pose, updating the seeing flag.
    pub fn can_see_target(&mut self, target: Option<TargetSnapshot>) -> bool {
        self.look(target).is_some()
    }

    /// Open the nearest closed door close ahead of the agent, if any.
    pub fn try_auto_open_door<W: SeekerWorldMut + ?Sized>(&mut self, world: &mut W) -> Option<usize> {
        let index = try_auto_open_door(
            self.mover.position(),
            self.mover.forward(),
            world.doors(),
            &self.config.doors,
        )?;
        world.open_door(index);
        tracing::debug!(agent = %self.id, door = index, "door opened");
        self.emit(TraceKind::DoorOpened { index });
        Some(index)
    }

    pub fn id(&self) -> SeekerId {
        self.id
    }

    pub fn config(&self) -> &SeekerConfig {
        &self.config
    }

    pub fn state(&self) -> SeekerState {
        self.behavior.state
    }

    pub fn behavior(&self) -> &BehaviorState {
        &self.behavior
    }

    pub fn position(&self) -> Vec3 {
        self.mover.position()
    }

    /// Teleport on XZ. Y stays on the tracked ground height.
    pub fn set_position(&mut self, position: Vec3) {
        self.mover.set_position(position);
    }

    pub fn forward(&self) -> Vec3 {
        self.mover.forward()
    }

    pub fn set_forward(&mut self, forward: Vec3) {
        self.mover.set_forward(forward);
    }

    pub fn ground_y(&self) -> f32 {
        self.mover.ground_y()
    }

    pub fn seeing(&self) -> bool {
        self.perception.seeing()
    }

    pub fn perception(&self) -> &Perception {
        &self.perception
    }

    pub fn perception_mut(&mut self) -> &mut Perception {
        &mut self.perception
    }

    pub fn route(&self) -> &PatrolRoute {
        &self.route
    }

    pub fn patrol_index(&self) -> usize {
        self.behavior.patrol_index
    }

    pub fn last_seen(&self) -> Vec3 {
        self.behavior.last_seen
    }

    pub fn search_points(&self) -> &[Vec3] {
        &self.behavior.search_points
    }

    pub fn detour(&self) -> Option<&Detour> {
        self.mover.detour()
    }

    /// Debug wedge mesh sized from the perception FOV and the debug range.
    pub fn ground_sector(&self) -> GroundSector {
        GroundSector::new(
            self.config.perception.half_fov() * 2.0,
            self.config.debug.sector_range,
            self.config.debug.sector_segments,
        )
    }

    pub fn sector_pose(&self) -> SectorPose {
        SectorPose::from_agent(
            self.mover.position(),
            self.mover.forward(),
            self.mover.ground_y(),
            self.perception.seeing(),
        )
    }

    fn update_patrol(&mut self, target: Option<TargetSnapshot>, colliders: &[Collider], dt: f32) {
        if let Some(seen) = self.look(target) {
            self.enter_chase(seen);
            return;
        }

        let Some(waypoint) = self.route.get(self.behavior.patrol_index) else {
            self.warn_if_no_route();
            return;
        };

        self.behavior.patrol_timer += dt;
        self.step(waypoint, colliders, dt);

        if self.mover.reached(waypoint) {
            self.advance_patrol(false);
        } else if self.behavior.patrol_timer > self.config.behavior.patrol_timeout {
            self.advance_patrol(true);
            self.mover.clear_detour();
        }
    }

    fn update_chase(&mut self, target: Option<TargetSnapshot>, colliders: &[Collider], dt: f32) {
        match self.look(target) {
            Some(seen) => {
                self.behavior.last_seen = self.grounded(seen.position);
                let goal = self.behavior.last_seen;
                self.step(goal, colliders, dt);
            }
            None => self.enter_search(),
        }
    }

    fn update_search(&mut self, target: Option<TargetSnapshot>, colliders: &[Collider], dt: f32) {
        self.behavior.search_timer += dt;

        if let Some(seen) = self.look(target) {
            self.enter_chase(seen);
            return;
        }

        if let Some(point) = self.behavior.current_search_point() {
            self.step(point, colliders, dt);
            if self.mover.reached(point) {
                self.behavior.search_index += 1;
            }
        }

        if self.behavior.search_timer > self.config.behavior.search_time_limit {
            let prev = self.behavior.enter_return();
            self.transition(prev);
        }
    }

    fn update_return(&mut self, colliders: &[Collider], dt: f32) {
        let Some(waypoint) = self.route.nearest(self.mover.position()).and_then(|i| self.route.get(i)) else {
            return;
        };

        self.step(waypoint, colliders, dt);

        if self.mover.reached(waypoint) {
            self.behavior.patrol_timer = 0.0;
            let prev = self.behavior.enter_patrol();
            self.transition(prev);
        }
    }

    fn enter_chase(&mut self, seen: TargetSnapshot) {
        let last_seen = self.grounded(seen.position);
        let prev = self.behavior.enter_chase(last_seen);
        tracing::debug!(agent = %self.id, x = last_seen.x, z = last_seen.z, "target spotted");
        self.transition(prev);
    }

    fn enter_search(&mut self) {
        let ring = search_ring(
            self.behavior.last_seen,
            self.config.behavior.search_radius,
            self.config.behavior.search_point_count,
            self.mover.ground_y(),
        );
        let prev = self.behavior.enter_search(ring);
        self.transition(prev);
    }

    fn advance_patrol(&mut self, timed_out: bool) {
        let index = self.route.next_index(self.behavior.patrol_index);
        self.behavior.patrol_index = index;
        self.behavior.patrol_timer = 0.0;
        if timed_out {
            tracing::debug!(agent = %self.id, index, "patrol waypoint timed out");
        }
        self.emit(TraceKind::WaypointAdvanced { index, timed_out });
    }

    /// Run perception; `Some` with the target when it is visible.
    fn look(&mut self, target: Option<TargetSnapshot>) -> Option<TargetSnapshot> {
        let was = self.perception.seeing();
        let visible = self.perception.can_see_target(
            self.mover.position(),
            self.mover.forward(),
            self.mover.ground_y(),
            target,
        );
        if visible != was {
            tracing::debug!(agent = %self.id, seeing = visible, "sight changed");
            self.emit(TraceKind::SightChanged { seeing: visible });
        }
        target.filter(|_| visible)
    }

    fn step(&mut self, goal: Vec3, colliders: &[Collider], dt: f32) {
        let outcome = self.mover.step_toward(goal, colliders, dt);
        if let Some(candidate) = outcome.detour {
            self.emit(TraceKind::DetourCommitted {
                x: candidate.position.x,
                z: candidate.position.z,
                score: candidate.score,
            });
        }
    }

    fn transition(&mut self, prev: SeekerState) {
        let next = self.behavior.state;
        if prev == next {
            return;
        }
        tracing::debug!(agent = %self.id, from = %prev, to = %next, "state changed");
        self.emit(TraceKind::StateChanged { from: prev, to: next });
    }

    fn grounded(&self, p: Vec3) -> Vec3 {
        Vec3::new(p.x, self.mover.ground_y(), p.z)
    }

    fn reset_patrol_cursor(&mut self) {
        self.behavior.patrol_index = 0;
        self.behavior.patrol_timer = 0.0;
        self.warned_no_route = false;
    }

    fn warn_if_no_route(&mut self) {
        if self.route.is_empty() && !self.warned_no_route {
            tracing::warn!(agent = %self.id, "no patrol points found; holding position");
            self.warned_no_route = true;
        }
    }

    fn emit(&mut self, kind: TraceKind) {
        if let Some(sink) = self.trace.as_mut() {
            sink.emit(TraceEvent::new(self.tick, self.id, kind));
        }
    }
}
