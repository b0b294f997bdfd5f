//! Inspection hooks for live debugging.
//!
//! Hooks wrap the host's stepping loop and are called around each
//! physics step to capture metrics without modifying the simulation.
//!
//! # Lifecycle
//!
//! ```text
//! for each fixed tick:
//!   hook.on_step_begin(...)
//!   let report = body.step(dt, plane);
//!   hook.on_step_end(..., &report)
//! hook.on_simulation_end()
//! ```

use wobble_sim::{SoftBody, StepReport};
use wobble_telemetry::events::{EventKind, SimulationEvent};
use wobble_telemetry::EventBus;

/// Trait for simulation inspection hooks.
///
/// Implement this to inject debugging/monitoring logic into the host
/// loop. Hooks are read-only observers of the body's state.
pub trait StepHook: Send {
    /// Called before each physics step.
    fn on_step_begin(&mut self, step: u64, sim_time: f64) {
        let _ = (step, sim_time);
    }

    /// Called after each physics step with the body and its report.
    fn on_step_end(&mut self, step: u64, body: &SoftBody, report: &StepReport) {
        let _ = (step, body, report);
    }

    /// Called when the simulation completes.
    fn on_simulation_end(&mut self) {}

    /// Returns the hook's name for logging.
    fn name(&self) -> &str;
}

/// Hook that bridges to the telemetry event bus.
///
/// Translates step lifecycle calls into telemetry events
/// (timing, contact summary, energy snapshot) for later dispatch.
pub struct TelemetryHook {
    events: Vec<SimulationEvent>,
}

impl TelemetryHook {
    /// Creates a new telemetry hook.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Drains collected events for dispatch through an
    /// [`wobble_telemetry::EventBus`].
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hands everything collected this step to the bus and closes the
    /// step boundary, delivering the events to every registered sink.
    pub fn flush_into(&mut self, bus: &mut EventBus) {
        for event in self.events.drain(..) {
            bus.record(event);
        }
        bus.end_step();
    }
}

impl Default for TelemetryHook {
    fn default() -> Self {
        Self::new()
    }
}

impl StepHook for TelemetryHook {
    fn on_step_begin(&mut self, step: u64, sim_time: f64) {
        self.events
            .push(SimulationEvent::new(step, EventKind::StepBegin { sim_time }));
    }

    fn on_step_end(&mut self, step: u64, body: &SoftBody, report: &StepReport) {
        self.events.push(SimulationEvent::new(
            step,
            EventKind::Contacts {
                attached_count: report.attached_contacts,
                max_penetration: report.max_penetration,
            },
        ));
        self.events.push(SimulationEvent::new(
            step,
            EventKind::Energy {
                kinetic: body.kinetic_energy(),
                potential: body.gravity_potential_energy(),
                elastic: body.spring_potential_energy(),
            },
        ));
        self.events.push(SimulationEvent::new(
            step,
            EventKind::StepEnd {
                wall_time: report.wall_time,
            },
        ));
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}
