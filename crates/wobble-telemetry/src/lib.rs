//! # wobble-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (timing, contacts, energy) that can be consumed by pluggable
//! sinks (in-memory buffers, `tracing`, custom exporters).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::SimulationEvent;
