//! Event bus — per-step buffered dispatch to pluggable sinks.
//!
//! The simulation core is single-threaded and synchronous, so the bus
//! is too: events recorded during a step are buffered in order and
//! delivered to every sink at the step boundary. Hosts call
//! [`EventBus::end_step`] once per fixed tick and [`EventBus::finish`]
//! when the simulation shuts down.

use crate::events::{EventKind, SimulationEvent};
use crate::sinks::EventSink;

/// Buffered broadcast bus for simulation telemetry.
///
/// Recording is cheap (a `Vec` push); sinks only run when the step
/// boundary flushes, so slow sinks never interleave with the physics
/// passes of the step that produced the events.
pub struct EventBus {
    /// Registered sinks.
    sinks: Vec<Box<dyn EventSink>>,
    /// Events recorded since the last step boundary.
    pending: Vec<SimulationEvent>,
    /// Whether the bus is active. A disabled bus records nothing.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            pending: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events at each step boundary.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. While disabled, `record` is a no-op.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records an event for delivery at the next step boundary.
    pub fn record(&mut self, event: SimulationEvent) {
        if self.enabled {
            self.pending.push(event);
        }
    }

    /// Convenience form of [`EventBus::record`] that builds the event.
    pub fn record_kind(&mut self, step: u64, kind: EventKind) {
        self.record(SimulationEvent::new(step, kind));
    }

    /// Step boundary: delivers everything recorded during the step to
    /// every sink, in recording order, and clears the buffer.
    pub fn end_step(&mut self) {
        for event in self.pending.drain(..) {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }

    /// Shuts the bus down: delivers any still-buffered events, then
    /// finalizes every sink.
    pub fn finish(&mut self) {
        self.end_step();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Number of events waiting for the next step boundary.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
