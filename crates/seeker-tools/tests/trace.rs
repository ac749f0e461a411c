use std::cell::RefCell;
use std::rc::Rc;

use seeker_core::{SeekerId, SeekerState};
use seeker_tools::{NullTraceSink, TraceEvent, TraceKind, TraceLog, TraceSink, VecTraceSink};

#[derive(Clone, Default)]
struct RcSink(Rc<RefCell<Vec<TraceEvent>>>);

impl TraceSink for RcSink {
    fn emit(&mut self, event: TraceEvent) {
        self.0.borrow_mut().push(event);
    }
}

fn changed(tick: u64, from: SeekerState, to: SeekerState) -> TraceEvent {
    TraceEvent::new(tick, SeekerId(1), TraceKind::StateChanged { from, to })
}

#[test]
fn boxed_sink_receives_events_in_order() {
    let handle = RcSink::default();
    let shared = handle.0.clone();
    let mut sink: Box<dyn TraceSink> = Box::new(handle);

    sink.emit(changed(1, SeekerState::Patrol, SeekerState::Chase));
    sink.emit(TraceEvent::new(2, SeekerId(1), TraceKind::DoorOpened { index: 3 }));

    let events = shared.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].tag(), "seeker.state");
    assert_eq!(events[1].kind, TraceKind::DoorOpened { index: 3 });
}

#[test]
fn vec_sink_and_null_sink() {
    let mut vec = VecTraceSink::default();
    vec.emit(TraceEvent::new(5, SeekerId(2), TraceKind::SightChanged { seeing: true }));
    assert_eq!(vec.events.len(), 1);
    assert_eq!(vec.events[0].agent, SeekerId(2));

    let mut null = NullTraceSink;
    null.emit(TraceEvent::new(5, SeekerId(2), TraceKind::SightChanged { seeing: false }));
}

#[test]
fn log_lists_transitions_only() {
    let mut log = TraceLog::default();
    log.emit(changed(1, SeekerState::Patrol, SeekerState::Chase));
    log.emit(TraceEvent::new(2, SeekerId(1), TraceKind::WaypointAdvanced { index: 1, timed_out: false }));
    log.emit(changed(9, SeekerState::Chase, SeekerState::Search));

    let transitions: Vec<_> = log.transitions().collect();
    assert_eq!(
        transitions,
        vec![
            (1, SeekerState::Patrol, SeekerState::Chase),
            (9, SeekerState::Chase, SeekerState::Search),
        ]
    );
}
