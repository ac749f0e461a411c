#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use seeker_core::{SeekerId, SeekerState};

/// What happened. Plain data so it can be recorded during a run and rendered later.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TraceKind {
    StateChanged { from: SeekerState, to: SeekerState },
    SightChanged { seeing: bool },
    DetourCommitted { x: f32, z: f32, score: f32 },
    DoorOpened { index: usize },
    /// The patrol cursor moved to `index`, either on arrival or on timeout.
    WaypointAdvanced { index: usize, timed_out: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub agent: SeekerId,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: TraceKind,
}

impl TraceEvent {
    pub fn new(tick: u64, agent: SeekerId, kind: TraceKind) -> Self {
        Self { tick, agent, kind }
    }

    /// Short stable tag, handy for filtering logs.
    pub fn tag(&self) -> &'static str {
        match self.kind {
            TraceKind::StateChanged { .. } => "seeker.state",
            TraceKind::SightChanged { .. } => "seeker.sight",
            TraceKind::DetourCommitted { .. } => "seeker.detour",
            TraceKind::DoorOpened { .. } => "seeker.door",
            TraceKind::WaypointAdvanced { .. } => "seeker.waypoint",
        }
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Recorded trace of a run.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    /// State transitions in order, as `(tick, from, to)`.
    pub fn transitions(&self) -> impl Iterator<Item = (u64, SeekerState, SeekerState)> + '_ {
        self.events.iter().filter_map(|e| match e.kind {
            TraceKind::StateChanged { from, to } => Some((e.tick, from, to)),
            _ => None,
        })
    }
}

impl TraceSink for TraceLog {
    fn emit(&mut self, event: TraceEvent) {
        self.push(event);
    }
}
