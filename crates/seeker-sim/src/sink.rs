use std::io::Write;

use seeker_tools::{TraceEvent, TraceKind, TraceSink};

/// Writes each event as one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn emit(&mut self, event: TraceEvent) {
        let line = match serde_json::to_string(&event) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(%err, "failed to encode trace event");
                return;
            }
        };
        if let Err(err) = writeln!(self.out, "{line}") {
            tracing::warn!(%err, "failed to write trace event");
        }
    }
}

/// Forwards events to `tracing` at info level.
#[derive(Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn emit(&mut self, event: TraceEvent) {
        let tick = event.tick;
        let agent = event.agent;
        match event.kind {
            TraceKind::StateChanged { from, to } => {
                tracing::info!(tick, %agent, %from, %to, "state changed")
            }
            TraceKind::SightChanged { seeing } => tracing::info!(tick, %agent, seeing, "sight changed"),
            TraceKind::DetourCommitted { x, z, score } => {
                tracing::info!(tick, %agent, x, z, score, "detour committed")
            }
            TraceKind::DoorOpened { index } => tracing::info!(tick, %agent, door = index, "door opened"),
            TraceKind::WaypointAdvanced { index, timed_out } => {
                tracing::info!(tick, %agent, index, timed_out, "waypoint advanced")
            }
        }
    }
}
