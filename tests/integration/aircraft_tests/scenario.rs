use approx::assert_relative_eq;
use flyer_lite::{
    components::{FlightConfig, FlightTelemetry},
    plugins::play_scenario,
    resources::Scenario,
    systems::FlightDynamics,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

use crate::common::{assert_state_bounded, TestAppBuilder};

fn manifest_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn test_shipped_flight_config_loads() {
    let config = FlightConfig::load(manifest_path("configs/flight.yaml")).unwrap();

    let mut expected = FlightConfig::default();
    expected.world.max_timestep = Some(0.1);
    assert_eq!(config, expected);
}

#[test]
fn test_shipped_takeoff_matches_builtin() {
    let scenario = Scenario::load(manifest_path("scenarios/takeoff.yaml")).unwrap();
    assert_eq!(scenario, Scenario::takeoff());
}

#[test]
fn test_circuit_scenario_loads() {
    let scenario = Scenario::load(manifest_path("scenarios/circuit.yaml")).unwrap();
    assert_eq!(scenario.segments.len(), 8);
    assert_eq!(
        scenario.steps().filter(|s| s.controls.landing_gear).count(),
        2
    );
}

#[test]
fn test_takeoff_scenario_through_app() {
    let scenario = Scenario::takeoff();
    let mut app = TestAppBuilder::new()
        .with_time_step(scenario.timestep)
        .build();
    let config = app.get_state::<FlightConfig>().unwrap().clone();

    let mut max_altitude: f64 = 0.0;
    for step in scenario.steps() {
        app.set_controls(step.controls.held());
        if step.controls.landing_gear {
            app.request_gear_toggle();
        }
        app.run_frame();

        let state = app.dynamics().state();
        assert_state_bounded(state, &config);
        max_altitude = max_altitude.max(state.altitude());
    }

    let dynamics = app.query_single::<FlightDynamics>().unwrap();
    assert!(!dynamics.state().gear_down, "gear should be retracted");
    assert!(max_altitude > 2.0, "never left the ground: {}", max_altitude);
    assert_relative_eq!(
        dynamics.elapsed(),
        scenario.total_duration(),
        epsilon = 1e-6
    );
}

#[test]
fn test_scenario_replay_matches_engine() {
    let scenario = Scenario::takeoff();
    let mut engine = FlightDynamics::default();
    for step in scenario.steps() {
        engine.advance(step.controls, scenario.timestep);
    }

    let mut app = TestAppBuilder::new()
        .with_time_step(scenario.timestep)
        .build();
    for step in scenario.steps() {
        app.set_controls(step.controls.held());
        if step.controls.landing_gear {
            app.request_gear_toggle();
        }
        app.run_frame();
    }

    assert_eq!(app.dynamics().state(), engine.state());
}

#[test]
fn test_playback_writes_sampled_telemetry() {
    let scenario = Scenario::takeoff();
    let mut app = TestAppBuilder::new()
        .with_time_step(scenario.timestep)
        .build();
    let aircraft = app.aircraft;

    let mut out = Vec::new();
    play_scenario(&mut app.app, aircraft, &scenario, &mut out).unwrap();

    let records: Vec<FlightTelemetry> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(
        records.len(),
        1 + scenario.step_count() / scenario.sample_every
    );

    let first = &records[0];
    assert_eq!(first.time, 0.0);
    assert!(first.gear_down);
    assert_eq!(first.speed, 0.0);

    let last = records.last().unwrap();
    assert_relative_eq!(last.time, scenario.total_duration(), epsilon = 1e-6);
    assert!(!last.gear_down);
    assert_relative_eq!(
        last.altitude,
        app.dynamics().state().altitude(),
        epsilon = 1e-9
    );
}

#[test]
fn test_playback_matches_engine_replay() {
    let scenario = Scenario::load(manifest_path("scenarios/circuit.yaml")).unwrap();
    let mut engine = FlightDynamics::default();
    for step in scenario.steps() {
        engine.advance(step.controls, scenario.timestep);
    }

    let mut app = TestAppBuilder::new()
        .with_time_step(scenario.timestep)
        .build();
    let aircraft = app.aircraft;
    play_scenario(&mut app.app, aircraft, &scenario, &mut std::io::sink()).unwrap();

    assert_eq!(app.dynamics().state(), engine.state());
    assert_relative_eq!(app.dynamics().elapsed(), engine.elapsed(), epsilon = 1e-9);
}
