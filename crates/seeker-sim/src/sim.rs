use glam::Vec3;
use seeker::{SeekerAgent, SightObserver};
use seeker_core::{SeekerConfig, SeekerId, SeekerState, TickContext};
use seeker_tools::TraceSink;

use crate::level::LevelFile;
use crate::world::SimWorld;
use crate::LevelError;

/// What the host observed after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub state: SeekerState,
    pub position: Vec3,
    pub seeing: bool,
    /// XZ distance to the target, when one is present.
    pub target_distance: Option<f32>,
}

/// One seeker in one level.
#[derive(Debug)]
pub struct Simulation {
    world: SimWorld,
    agent: SeekerAgent,
    tick: u64,
}

impl Simulation {
    pub fn new(level: &LevelFile, config: SeekerConfig) -> Result<Self, LevelError> {
        let world = SimWorld::from_level(level);
        let mut agent = SeekerAgent::new(SeekerId(0), config, Vec3::ZERO)?;
        agent.set_waypoints_from_anchors(&level.anchors);
        Ok(Self { world, agent, tick: 0 })
    }

    pub fn with_trace_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.agent = self.agent.with_trace_sink(sink);
        self
    }

    pub fn with_observer(mut self, observer: impl SightObserver + 'static) -> Self {
        self.agent = self.agent.with_observer(observer);
        self
    }

    pub fn agent(&self) -> &SeekerAgent {
        &self.agent
    }

    pub fn world(&self) -> &SimWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut SimWorld {
        &mut self.world
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Host step (doors, target) followed by one seeker update.
    pub fn step(&mut self, dt: f32) -> TickReport {
        self.world.step(dt);
        self.agent.update(&TickContext::new(self.tick, dt), &mut self.world);

        let report = TickReport {
            tick: self.tick,
            state: self.agent.state(),
            position: self.agent.position(),
            seeing: self.agent.seeing(),
            target_distance: self.world.distance_to_target(self.agent.position()),
        };
        self.tick += 1;
        report
    }

    /// Run `ticks` steps of `dt`, returning every report.
    pub fn run(&mut self, ticks: u64, dt: f32) -> Vec<TickReport> {
        (0..ticks).map(|_| self.step(dt)).collect()
    }
}
