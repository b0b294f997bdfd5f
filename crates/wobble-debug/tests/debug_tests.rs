//! Integration tests for wobble-debug.

use wobble_debug::hooks::{StepHook, TelemetryHook};
use wobble_debug::lines::{self, VecLineSink, FORCE_COLOR, SPRING_COLOR};
use wobble_debug::snapshot::StateSnapshot;
use wobble_math::Vec3;
use wobble_sim::{SimConfig, SoftBody};
use wobble_telemetry::events::EventKind;
use wobble_telemetry::sinks::MemorySink;
use wobble_telemetry::EventBus;
use wobble_types::WobbleError;

fn jiggle_body(debug_draw: bool) -> SoftBody {
    let points = vec![
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
    ];
    let config = SimConfig {
        collisions_enabled: false,
        debug_draw_enabled: debug_draw,
        ..Default::default()
    };
    SoftBody::from_points(&points, config, None).unwrap()
}

// ─── Line Output Tests ────────────────────────────────────────

#[test]
fn draw_forces_emits_one_line_per_particle() {
    let mut body = jiggle_body(true);
    body.step(1.0 / 60.0, None);

    let mut sink = VecLineSink::new();
    lines::draw_forces(&body, &mut sink);

    assert_eq!(sink.segments.len(), 3);
    for seg in &sink.segments {
        assert_eq!(seg.color, FORCE_COLOR);
    }
}

#[test]
fn draw_springs_emits_one_line_per_pair() {
    let body = jiggle_body(true);
    let mut sink = VecLineSink::new();
    lines::draw_springs(&body, &mut sink);

    // 3 particles → 3 unordered pairs, each drawn exactly once.
    assert_eq!(sink.segments.len(), 3);
    for seg in &sink.segments {
        assert_eq!(seg.color, SPRING_COLOR);
        assert!(seg.from != seg.to);
    }
}

#[test]
fn draw_body_respects_config_gate() {
    let body = jiggle_body(false);
    let mut sink = VecLineSink::new();
    lines::draw_body(&body, &mut sink);
    assert!(sink.segments.is_empty());

    let body = jiggle_body(true);
    lines::draw_body(&body, &mut sink);
    assert_eq!(sink.segments.len(), 3 + 3);
}

// ─── Hook Tests ───────────────────────────────────────────────

#[test]
fn telemetry_hook_collects_step_events() {
    let mut body = jiggle_body(false);
    let mut hook = TelemetryHook::new();

    for _ in 0..3 {
        let step = body.step_count();
        hook.on_step_begin(step, body.sim_time());
        let report = body.step(1.0 / 60.0, None);
        hook.on_step_end(step, &body, &report);
    }
    hook.on_simulation_end();

    let events = hook.drain_events();
    // Per step: StepBegin, Contacts, Energy, StepEnd.
    assert_eq!(events.len(), 3 * 4);
    assert!(matches!(events[0].kind, EventKind::StepBegin { .. }));
    assert!(matches!(events[3].kind, EventKind::StepEnd { .. }));
    assert_eq!(hook.name(), "telemetry_hook");

    // Draining leaves the hook empty.
    assert!(hook.drain_events().is_empty());
}

#[test]
fn telemetry_hook_reports_energy() {
    let mut body = jiggle_body(false);
    let mut hook = TelemetryHook::new();

    let report = body.step(1.0 / 60.0, None);
    hook.on_step_end(0, &body, &report);

    let events = hook.drain_events();
    let energy = events
        .iter()
        .find_map(|e| match e.kind {
            EventKind::Energy { kinetic, .. } => Some(kinetic),
            _ => None,
        })
        .unwrap();
    // Gravity accelerated the particles: kinetic energy is non-zero.
    assert!(energy > 0.0);
}

#[test]
fn telemetry_hook_flushes_through_the_bus() {
    let sink = MemorySink::new();
    let collected = sink.events_handle();

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(sink));

    let mut body = jiggle_body(false);
    let mut hook = TelemetryHook::new();

    for _ in 0..2 {
        let step = body.step_count();
        hook.on_step_begin(step, body.sim_time());
        let report = body.step(1.0 / 60.0, None);
        hook.on_step_end(step, &body, &report);
        hook.flush_into(&mut bus);
    }

    // Per step: StepBegin, Contacts, Energy, StepEnd, delivered in order.
    let events = collected.lock().unwrap();
    assert_eq!(events.len(), 2 * 4);
    assert!(matches!(events[0].kind, EventKind::StepBegin { .. }));
    assert!(matches!(events[7].kind, EventKind::StepEnd { .. }));
    assert_eq!(events[4].step, 1);
}

// ─── Snapshot Tests ───────────────────────────────────────────

#[test]
fn snapshot_round_trip() {
    let mut body = jiggle_body(false);
    for _ in 0..10 {
        body.step(1.0 / 60.0, None);
    }

    let snapshot =
        StateSnapshot::from_particles(body.step_count(), body.sim_time(), body.particles());
    assert_eq!(snapshot.particle_count, 3);
    assert_eq!(snapshot.positions.len(), 9);

    let bytes = snapshot.to_bytes();
    let recovered = StateSnapshot::from_bytes(&bytes).unwrap();
    assert_eq!(recovered.step, snapshot.step);
    assert_eq!(recovered.positions, snapshot.positions);
    assert_eq!(recovered.velocities, snapshot.velocities);
}

#[test]
fn snapshot_rejects_garbage() {
    let err = StateSnapshot::from_bytes(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, WobbleError::Serialization(_)));
    assert!(err.to_string().contains("Serialization error"));
}
