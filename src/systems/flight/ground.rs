use crate::components::{AircraftState, GroundConfig};

/// Share of lift that turns into climb at a given speed.
///
/// Full above takeoff speed, linear in `speed / takeoff_speed` between the
/// minimum lift speed and takeoff speed, none below.
pub fn lift_fraction(speed: f64, ground: &GroundConfig) -> f64 {
    if speed > ground.takeoff_speed {
        1.0
    } else if speed > ground.min_lift_speed {
        speed / ground.takeoff_speed
    } else {
        0.0
    }
}

/// Integrates lift and gravity into altitude, then resolves ground contact.
///
/// Returns true if the aircraft was pushed back up to the ground this step.
pub fn integrate_vertical(state: &mut AircraftState, ground: &GroundConfig, dt: f64) -> bool {
    state.position.y += state.lift * lift_fraction(state.speed, ground) * dt;

    if !state.on_runway {
        let gravity = if state.stalling {
            ground.gravity * ground.stall_gravity_factor
        } else {
            ground.gravity
        };
        state.position.y -= gravity * dt;
    }

    if state.position.y >= ground.ground_height {
        return false;
    }

    state.position.y = ground.ground_height.max(ground.min_clearance);

    if state.on_runway {
        state.speed = (state.speed - ground.runway_friction * dt).max(0.0);
        state.angular_velocity.x *= ground.ground_rate_damping;
        state.angular_velocity.z *= ground.ground_rate_damping;

        if state.speed < ground.rest_pitch_speed {
            let settle = (ground.rest_pitch_rate * dt).min(1.0);
            state.attitude.pitch += (ground.rest_pitch - state.attitude.pitch) * settle;
        }
    } else {
        state.speed = (state.speed - ground.rough_friction * dt).max(0.0);
    }

    true
}
