use serde::{Deserialize, Serialize};

use crate::components::aircraft::AircraftState;

/// Status-display snapshot of the aircraft after a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightTelemetry {
    /// Simulated seconds since the engine was created or reset.
    pub time: f64,
    pub position: [f64; 3],
    pub altitude: f64,
    pub speed: f64,
    pub throttle: f64,
    pub heading_deg: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
    pub lift: f64,
    pub drag: f64,
    pub gear_down: bool,
    pub on_runway: bool,
    pub stalling: bool,
}

impl FlightTelemetry {
    pub fn from_state(state: &AircraftState, time: f64) -> Self {
        Self {
            time,
            position: [state.position.x, state.position.y, state.position.z],
            altitude: state.altitude(),
            speed: state.speed,
            throttle: state.throttle,
            heading_deg: state.attitude.heading_degrees(),
            pitch_deg: state.attitude.pitch.to_degrees(),
            roll_deg: state.attitude.roll.to_degrees(),
            lift: state.lift,
            drag: state.drag,
            gear_down: state.gear_down,
            on_runway: state.on_runway,
            stalling: state.stalling,
        }
    }
}
