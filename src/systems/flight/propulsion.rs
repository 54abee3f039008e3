use crate::components::{AircraftState, ControlInput, PropulsionConfig};

/// Ramps the throttle while throttle or brake is held, clamped to [0, 1].
pub fn update_throttle(
    state: &mut AircraftState,
    input: &ControlInput,
    config: &PropulsionConfig,
    dt: f64,
) {
    let ramp = config.throttle_rate * dt;
    if input.throttle {
        state.throttle += ramp;
    }
    if input.brake {
        state.throttle -= ramp;
    }
    state.throttle = state.throttle.clamp(0.0, 1.0);
}

/// Speed commanded by the current throttle setting.
pub fn target_speed(throttle: f64, config: &PropulsionConfig) -> f64 {
    config.max_speed * throttle
}

/// Moves speed toward the throttle target, then bleeds off drag.
///
/// `state.drag` still holds the value computed from the previous step's
/// speed. Applying it here, before this step's lift and drag are computed,
/// is part of the flight feel and must stay in this order.
pub fn update_speed(state: &mut AircraftState, config: &PropulsionConfig, dt: f64) {
    let target = target_speed(state.throttle, config);

    if state.throttle > 0.0 {
        // Never above the target, even right after the throttle is pulled back.
        let acceleration = state.throttle * config.max_speed;
        state.speed = (state.speed + acceleration * dt).min(target);
    } else {
        state.speed = (state.speed - config.idle_deceleration * dt).max(0.0);
    }

    state.speed = (state.speed - state.drag * dt).max(0.0);
}
