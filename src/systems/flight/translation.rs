use crate::components::{AircraftState, WorldConfig};

/// Wraps a coordinate onto [-half_extent, half_extent], re-entering from the opposite edge.
pub fn wrap_coordinate(value: f64, half_extent: f64) -> f64 {
    if (-half_extent..=half_extent).contains(&value) {
        value
    } else {
        (value + half_extent).rem_euclid(2.0 * half_extent) - half_extent
    }
}

/// Moves along the nose direction on x/z, then applies the world wrap and ceiling.
///
/// Altitude is owned by the vertical integration stage; only the ceiling applies here.
pub fn translate(state: &mut AircraftState, world: &WorldConfig, dt: f64) {
    let forward = state.attitude.forward();
    let distance = state.speed * dt;

    state.position.x = wrap_coordinate(state.position.x + forward.x * distance, world.half_extent);
    state.position.z = wrap_coordinate(state.position.z + forward.z * distance, world.half_extent);
    state.position.y = state.position.y.min(world.ceiling);
}
