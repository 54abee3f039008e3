use crate::components::{AircraftState, ControlConfig, ControlInput, SmoothingMode};

/// Fraction of the remaining distance to target covered in one step.
pub fn smoothing_factor(rate: f64, dt: f64, mode: SmoothingMode) -> f64 {
    match mode {
        SmoothingMode::Linear => rate * dt,
        SmoothingMode::Exact => 1.0 - (-rate * dt).exp(),
    }
}

fn approach(current: f64, target: f64, factor: f64) -> f64 {
    (current + (target - current) * factor).clamp(-1.0, 1.0)
}

/// Low-pass filters the three control axes toward their flag targets.
pub fn smooth_inputs(
    state: &mut AircraftState,
    input: &ControlInput,
    config: &ControlConfig,
    dt: f64,
) {
    let factor = smoothing_factor(config.smoothing_rate, dt, config.smoothing);

    state.pitch_input = approach(state.pitch_input, input.pitch_target(), factor);
    state.roll_input = approach(state.roll_input, input.roll_target(), factor);
    state.yaw_input = approach(state.yaw_input, input.yaw_target(), factor);
}

/// Lets the neutral attitude follow the aircraft while the pilot is hands-off.
pub fn update_trim(state: &mut AircraftState, config: &ControlConfig, dt: f64) {
    if state.speed <= config.trim_min_speed {
        return;
    }

    if state.pitch_input.abs() < config.trim_input_deadband {
        state.pitch_trim += (state.attitude.pitch - state.pitch_trim) * config.pitch_trim_rate * dt;
        state.pitch_trim = state
            .pitch_trim
            .clamp(-config.pitch_trim_limit, config.pitch_trim_limit);
    }

    if state.roll_input.abs() < config.trim_input_deadband {
        state.roll_trim += (state.attitude.roll - state.roll_trim) * config.roll_trim_rate * dt;
        state.roll_trim = state
            .roll_trim
            .clamp(-config.roll_trim_limit, config.roll_trim_limit);
    }
}
