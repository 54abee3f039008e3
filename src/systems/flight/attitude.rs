use nalgebra::Vector3;

use crate::components::{AircraftState, AttitudeConfig};

/// Speed-derived scale on control authority and stability, in [min_effectiveness, 1].
pub fn speed_effectiveness(speed: f64, config: &AttitudeConfig) -> f64 {
    (speed / config.effectiveness_speed).clamp(config.min_effectiveness, 1.0)
}

/// Angular acceleration from the smoothed inputs (x = pitch, y = yaw, z = roll).
pub fn control_acceleration(
    state: &AircraftState,
    effectiveness: f64,
    config: &AttitudeConfig,
) -> Vector3<f64> {
    Vector3::new(
        state.pitch_input * config.pitch_authority,
        state.yaw_input * config.yaw_authority,
        state.roll_input * config.roll_authority,
    ) * effectiveness
}

/// Restoring acceleration toward the trimmed attitude. Yaw always relaxes to zero.
pub fn stability_acceleration(
    state: &AircraftState,
    effectiveness: f64,
    config: &AttitudeConfig,
) -> Vector3<f64> {
    let attitude = &state.attitude;
    let scale = effectiveness * config.stability;

    Vector3::new(
        -(attitude.pitch - state.pitch_trim) * config.pitch_stability,
        -attitude.yaw * config.yaw_stability,
        -(attitude.roll - state.roll_trim) * config.roll_stability,
    ) * scale
}

/// Control torque, stability, damping, then integration and attitude limits.
pub fn update_attitude(state: &mut AircraftState, config: &AttitudeConfig, dt: f64) {
    if state.speed > config.min_control_speed {
        let effectiveness = speed_effectiveness(state.speed, config);
        let acceleration = control_acceleration(state, effectiveness, config)
            + stability_acceleration(state, effectiveness, config);
        state.angular_velocity += acceleration * dt;
    }

    state.angular_velocity *= (1.0 - config.damping * dt).max(0.0);

    let rates = state.angular_velocity;
    let attitude = &mut state.attitude;
    attitude.pitch = (attitude.pitch + rates.x * dt).clamp(-config.pitch_limit, config.pitch_limit);
    attitude.yaw += rates.y * dt;
    attitude.roll = (attitude.roll + rates.z * dt).clamp(-config.roll_limit, config.roll_limit);
}
