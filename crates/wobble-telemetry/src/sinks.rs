//! Event sinks.
//!
//! A sink receives every event the bus delivers at a step boundary.
//! Two implementations ship with the engine: [`MemorySink`] for tests
//! and offline analysis, and [`TracingSink`] which maps event kinds
//! onto `tracing` levels.

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, SimulationEvent};

/// Receives telemetry events from the bus.
pub trait EventSink: Send {
    /// Handles one event. Called in recording order at step boundaries.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called once when the simulation shuts down.
    fn finalize(&mut self) {}

    /// Sink name for diagnostics.
    fn name(&self) -> &str;
}

/// Collects events into shared memory.
///
/// The sink itself is boxed into the bus, so inspection goes through a
/// cloned handle obtained with [`MemorySink::events_handle`] before
/// registration.
pub struct MemorySink {
    events: Arc<Mutex<Vec<SimulationEvent>>>,
}

impl MemorySink {
    /// Creates an empty memory sink.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a handle to the collected events. Clones of this handle
    /// stay valid after the sink is moved into a bus.
    pub fn events_handle(&self) -> Arc<Mutex<Vec<SimulationEvent>>> {
        Arc::clone(&self.events)
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for MemorySink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Forwards events to the `tracing` subscriber.
///
/// Step markers go out at `trace` level so a default subscriber is not
/// flooded at the tick rate; contact and energy summaries at `debug`;
/// custom events at `info`.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        match &event.kind {
            EventKind::StepBegin { sim_time } => {
                tracing::trace!(step = event.step, sim_time, "step begin");
            }
            EventKind::StepEnd { wall_time } => {
                tracing::trace!(step = event.step, wall_time, "step end");
            }
            EventKind::Contacts {
                attached_count,
                max_penetration,
            } => {
                tracing::debug!(
                    step = event.step,
                    attached_count,
                    max_penetration,
                    "plane contacts"
                );
            }
            EventKind::Energy {
                kinetic,
                potential,
                elastic,
            } => {
                tracing::debug!(step = event.step, kinetic, potential, elastic, "energy");
            }
            EventKind::Custom { label, payload } => {
                tracing::info!(step = event.step, label, payload, "custom event");
            }
        }
    }

    fn finalize(&mut self) {
        tracing::debug!("telemetry sink shutting down");
    }

    fn name(&self) -> &str {
        "tracing"
    }
}
