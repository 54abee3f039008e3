use nalgebra::Vector3;

use crate::components::{AeroConfig, AircraftState, FlightConfig, GroundConfig, LiftCurve};

/// Geometric runway test: inside the runway rectangle and at ground level.
pub fn is_on_runway(position: &Vector3<f64>, ground: &GroundConfig) -> bool {
    position.x.abs() < ground.runway_half_width
        && position.z.abs() < ground.runway_half_length
        && position.y <= ground.ground_height + ground.runway_tolerance
}

/// Too slow while airborne and clear of the runway.
pub fn is_stalling(speed: f64, on_runway: bool, altitude: f64, aero: &AeroConfig) -> bool {
    speed < aero.stall_speed && !on_runway && altitude > aero.stall_min_altitude
}

/// Lift multiplier for a given angle of attack (pitch angle, radians).
pub fn lift_effect(aoa: f64, curve: &LiftCurve) -> f64 {
    if aoa < curve.low_aoa {
        curve.low_effect
    } else if aoa <= curve.high_aoa {
        curve.base_effect + curve.linear_slope * aoa
    } else {
        curve.peak_effect - curve.falloff_slope * (aoa - curve.high_aoa)
    }
}

/// Quadratic drag.
pub fn compute_drag(speed: f64, aero: &AeroConfig) -> f64 {
    speed * speed * aero.drag_coefficient
}

pub fn compute_lift(speed: f64, aoa: f64, stalling: bool, aero: &AeroConfig) -> f64 {
    let effect = lift_effect(aoa, &aero.lift_curve).max(aero.lift_curve.min_effect);
    let lift = speed * speed * aero.lift_coefficient * effect;
    if stalling {
        lift * aero.stall_lift_factor
    } else {
        lift
    }
}

/// Recomputes the runway and stall flags from the current position and speed.
pub fn classify(state: &mut AircraftState, config: &FlightConfig) {
    state.on_runway = is_on_runway(&state.position, &config.ground);
    state.stalling = is_stalling(
        state.speed,
        state.on_runway,
        state.altitude(),
        &config.aero,
    );
}

/// Recomputes lift and drag from this step's speed and attitude.
pub fn update_forces(state: &mut AircraftState, aero: &AeroConfig) {
    state.drag = compute_drag(state.speed, aero);
    state.lift = compute_lift(state.speed, state.attitude.pitch, state.stalling, aero);
}
