#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use seeker_core::{Collider, Door, SeekerWorldMut, SeekerWorldView, TargetSnapshot, Vec3};
use seeker_tools::{TraceEvent, TraceSink};

/// Minimal host: everything is plain fields the test sets directly.
#[derive(Debug, Default)]
pub struct TestWorld {
    pub colliders: Vec<Collider>,
    pub geometry: Option<Vec<Collider>>,
    pub doors: Vec<Door>,
    pub target: Option<TargetSnapshot>,
    pub opened: Vec<usize>,
}

impl TestWorld {
    /// Loaded level with no geometry at all.
    pub fn open() -> Self {
        Self {
            geometry: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, position: Vec3) -> Self {
        self.target = Some(TargetSnapshot::new(position));
        self
    }

    /// Same boxes for movement and line of sight.
    pub fn with_walls(mut self, walls: Vec<Collider>) -> Self {
        self.geometry = Some(walls.clone());
        self.colliders = walls;
        self
    }

    pub fn set_target(&mut self, position: Option<Vec3>) {
        self.target = position.map(TargetSnapshot::new);
    }
}

impl SeekerWorldView for TestWorld {
    fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    fn level_geometry(&self) -> Option<&[Collider]> {
        self.geometry.as_deref()
    }

    fn doors(&self) -> &[Door] {
        &self.doors
    }

    fn target(&self) -> Option<TargetSnapshot> {
        self.target
    }
}

impl SeekerWorldMut for TestWorld {
    fn open_door(&mut self, index: usize) {
        if let Some(door) = self.doors.get_mut(index) {
            door.is_open = true;
            self.opened.push(index);
        }
    }
}

#[derive(Clone, Default)]
pub struct RcSink(pub Rc<RefCell<Vec<TraceEvent>>>);

impl TraceSink for RcSink {
    fn emit(&mut self, event: TraceEvent) {
        self.0.borrow_mut().push(event);
    }
}
