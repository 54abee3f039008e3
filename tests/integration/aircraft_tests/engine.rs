use approx::assert_relative_eq;
use flyer_lite::{
    components::{AircraftState, ControlInput, EulerAttitude, FlightConfig},
    systems::FlightDynamics,
};
use nalgebra::Vector3;
use rand::Rng;
use std::f64::consts::PI;

use crate::common::{
    assert_integrated_state_eq, assert_state_bounded, create_airborne_engine, full_power,
    random_controls, seeded_rng, FRAME_DT,
};

#[test]
fn test_random_controls_stay_bounded() {
    for seed in [1, 7, 42] {
        let mut rng = seeded_rng(seed);
        let mut engine = FlightDynamics::default();
        let config = engine.config().clone();

        for _ in 0..3000 {
            let controls = random_controls(&mut rng);
            let dt = rng.gen_range(0.0..0.05);
            engine.advance(controls, dt);
            assert_state_bounded(engine.state(), &config);
        }
    }
}

#[test]
fn test_random_flight_from_altitude_stays_bounded() {
    let mut rng = seeded_rng(2024);
    let mut engine = create_airborne_engine(150.0, 3.0);
    let config = engine.config().clone();

    for _ in 0..5000 {
        // Hold each random input for a while so the aircraft actually manoeuvres.
        let controls = random_controls(&mut rng);
        for _ in 0..rng.gen_range(1..30) {
            engine.advance(controls, FRAME_DT);
            assert_state_bounded(engine.state(), &config);
        }
    }
}

#[test]
fn test_zero_timestep_is_idempotent() {
    let mut rng = seeded_rng(99);
    let mut engine = create_airborne_engine(40.0, 2.0);

    for _ in 0..200 {
        for _ in 0..rng.gen_range(0..20) {
            engine.advance(random_controls(&mut rng).held(), FRAME_DT);
        }

        let before = engine.state().clone();
        let elapsed = engine.elapsed();
        let controls = random_controls(&mut rng);

        let report = engine.advance(controls, 0.0);

        assert_integrated_state_eq(engine.state(), &before);
        assert_eq!(engine.elapsed(), elapsed);
        assert_eq!(report.gear_toggled, controls.landing_gear);
        assert_eq!(
            engine.state().gear_down,
            before.gear_down ^ controls.landing_gear
        );
    }
}

#[test]
fn test_stall_rule() {
    let positions = [
        Vector3::new(0.0, 0.85, 0.0),     // on the runway
        Vector3::new(0.0, 10.0, 0.0),     // over the runway, too high to count
        Vector3::new(300.0, 10.0, 300.0), // open country
        Vector3::new(300.0, 1.5, 300.0),  // too low to stall
    ];
    let config = FlightConfig::default();

    for position in positions {
        for speed in [0.0, 0.1, 0.29, 0.31, 1.0, 3.0] {
            let mut state = AircraftState::at_position(position);
            state.speed = speed;
            let mut engine = FlightDynamics::with_state(config.clone(), state);

            engine.advance(ControlInput::neutral(), 0.0);

            let on_runway = position.x.abs() < 25.0
                && position.z.abs() < 100.0
                && position.y <= 0.9;
            let expected = speed < 0.3 && !on_runway && position.y > 2.0;
            assert_eq!(engine.state().on_runway, on_runway, "{:?}", position);
            assert_eq!(
                engine.state().stalling,
                expected,
                "speed {} at {:?}",
                speed,
                position
            );
        }
    }
}

#[test]
fn test_stalled_aircraft_sinks_faster() {
    let mut stalled = create_airborne_engine(50.0, 0.0);
    let mut flying = create_airborne_engine(50.0, 0.35);

    stalled.advance(ControlInput::neutral(), 0.1);
    flying.advance(ControlInput::neutral(), 0.1);

    assert!(stalled.state().stalling);
    assert!(!flying.state().stalling);
    // 2.5x gravity, no lift below the minimum lift speed.
    assert_relative_eq!(stalled.state().position.y, 50.0 - 0.075, epsilon = 1e-12);
    assert_relative_eq!(flying.state().position.y, 50.0 - 0.03, epsilon = 1e-12);
}

#[test]
fn test_throttle_ramp_reaches_full_power() {
    let mut engine = FlightDynamics::default();

    for _ in 0..125 {
        engine.advance(full_power(), FRAME_DT);
    }
    assert_relative_eq!(engine.state().throttle, 1.0, epsilon = 1e-9);

    for _ in 0..50 {
        engine.advance(full_power(), FRAME_DT);
    }
    assert_eq!(engine.state().throttle, 1.0);
}

#[test]
fn test_braking_from_cruise_slows_to_target() {
    let mut engine = create_airborne_engine(100.0, 3.5);
    let config = engine.config().clone();
    let brake = ControlInput {
        brake: true,
        ..Default::default()
    };

    for _ in 0..60 {
        engine.advance(brake, FRAME_DT);
        assert_state_bounded(engine.state(), &config);
    }

    let state = engine.state();
    assert_relative_eq!(state.throttle, 0.52, epsilon = 1e-9);
    assert!(state.speed <= 1.82 + 1e-9, "speed {} above 1.82", state.speed);
}

#[test]
fn test_flight_wraps_across_world_edge() {
    let config = FlightConfig::default();
    let state = AircraftState::in_flight(
        Vector3::new(0.0, 50.0, 795.0),
        PI,
        config.propulsion.max_speed,
        config.propulsion.max_speed,
    );
    let mut engine = FlightDynamics::with_state(config.clone(), state);

    let mut wrapped = false;
    let mut previous_z = engine.state().position.z;
    for _ in 0..200 {
        engine.advance(full_power(), FRAME_DT);
        let z = engine.state().position.z;
        assert_state_bounded(engine.state(), &config);
        if previous_z > 700.0 && z < -700.0 {
            wrapped = true;
        }
        previous_z = z;
    }
    assert!(wrapped, "never crossed the far edge, z = {}", previous_z);
}

#[test]
fn test_rough_ground_contact() {
    let config = FlightConfig::default();
    let mut state = AircraftState::at_position(Vector3::new(300.0, 0.81, 300.0));
    state.speed = 0.5;
    let mut engine = FlightDynamics::with_state(config.clone(), state);

    let mut contact = false;
    for _ in 0..30 {
        contact |= engine.advance(ControlInput::neutral(), FRAME_DT).ground_contact;
        assert!(engine.state().position.y >= 0.8);
    }

    assert!(contact);
    assert!(!engine.state().on_runway);
    assert_eq!(engine.state().position.y, 0.8);
    // Idle deceleration alone would leave about 0.44.
    assert!(
        engine.state().speed < 0.25,
        "rough ground should slow the aircraft, speed = {}",
        engine.state().speed
    );
}

#[test]
fn test_level_attitude_is_stable_in_cruise() {
    let mut engine = create_airborne_engine(100.0, 2.0);
    let mut state = engine.state().clone();
    state.attitude = EulerAttitude::new(0.2, 0.0, 0.3);
    engine = FlightDynamics::with_state(engine.config().clone(), state);

    for _ in 0..600 {
        engine.advance(ControlInput::neutral(), FRAME_DT);
    }

    let attitude = engine.state().attitude;
    assert!(attitude.roll.abs() < 0.3, "roll did not relax: {}", attitude.roll);
    assert!(attitude.pitch.abs() < 0.2, "pitch did not relax: {}", attitude.pitch);
}
