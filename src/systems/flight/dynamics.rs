use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{AircraftState, ControlInput, FlightConfig, FlightTelemetry};
use crate::systems::flight::{aerodynamics, attitude, controls, ground, propulsion, translation};

/// Change of flight mode observed during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightTransition {
    StallEntered,
    StallRecovered,
    TouchedDown,
    LiftedOff,
}

/// What happened during one call to [`FlightDynamics::advance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// The gear command was consumed and the gear toggled.
    pub gear_toggled: bool,
    pub stall_entered: bool,
    pub stall_recovered: bool,
    pub touched_down: bool,
    pub lifted_off: bool,
    /// The ground clamp pushed the aircraft back up this step.
    pub ground_contact: bool,
}

impl StepReport {
    pub fn transitions(&self) -> Vec<FlightTransition> {
        [
            (self.stall_entered, FlightTransition::StallEntered),
            (self.stall_recovered, FlightTransition::StallRecovered),
            (self.touched_down, FlightTransition::TouchedDown),
            (self.lifted_off, FlightTransition::LiftedOff),
        ]
        .into_iter()
        .filter_map(|(happened, transition)| happened.then_some(transition))
        .collect()
    }
}

/// The flight dynamics engine for one aircraft.
///
/// Owns the aircraft state and the constants that drive it. Each call to
/// [`advance`](Self::advance) runs the full pipeline once:
///
/// 1. throttle and speed
/// 2. runway and stall classification
/// 3. lift and drag
/// 4. vertical integration and ground contact
/// 5. input smoothing and auto-trim
/// 6. attitude dynamics
/// 7. translation and world wrap
/// 8. landing gear
#[derive(Component, Debug, Clone)]
pub struct FlightDynamics {
    config: FlightConfig,
    state: AircraftState,
    elapsed: f64,
}

impl Default for FlightDynamics {
    fn default() -> Self {
        Self::new(FlightConfig::default())
    }
}

impl FlightDynamics {
    /// Parks a fresh aircraft at the configured start position.
    pub fn new(config: FlightConfig) -> Self {
        let state = AircraftState::at_position(config.world.start_position);
        Self::with_state(config, state)
    }

    /// Starts the engine from an explicit state.
    pub fn with_state(config: FlightConfig, state: AircraftState) -> Self {
        Self {
            config,
            state,
            elapsed: 0.0,
        }
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    /// Simulated seconds since creation or the last reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Returns the aircraft to the configured start.
    pub fn reset(&mut self) {
        self.state = AircraftState::at_position(self.config.world.start_position);
        self.elapsed = 0.0;
    }

    pub fn telemetry(&self) -> FlightTelemetry {
        FlightTelemetry::from_state(&self.state, self.elapsed)
    }

    /// Advances the aircraft by `dt` seconds under `input`.
    ///
    /// Never fails. A negative or non-finite `dt` is treated as zero; a `dt`
    /// above `world.max_timestep` is clamped to it. The gear command in
    /// `input` fires even when `dt` is zero.
    pub fn advance(&mut self, input: ControlInput, dt: f64) -> StepReport {
        let dt = self.sanitize_timestep(dt);
        let config = &self.config;
        let state = &mut self.state;

        let was_stalling = state.stalling;
        let was_on_runway = state.on_runway;

        propulsion::update_throttle(state, &input, &config.propulsion, dt);
        propulsion::update_speed(state, &config.propulsion, dt);

        aerodynamics::classify(state, config);
        aerodynamics::update_forces(state, &config.aero);

        let ground_contact = ground::integrate_vertical(state, &config.ground, dt);

        controls::smooth_inputs(state, &input, &config.controls, dt);
        controls::update_trim(state, &config.controls, dt);

        attitude::update_attitude(state, &config.attitude, dt);

        translation::translate(state, &config.world, dt);

        if input.landing_gear {
            state.gear_down = !state.gear_down;
            let position = if state.gear_down { "down" } else { "up" };
            info!("Landing gear {}", position);
        }

        let report = StepReport {
            gear_toggled: input.landing_gear,
            stall_entered: !was_stalling && state.stalling,
            stall_recovered: was_stalling && !state.stalling,
            touched_down: !was_on_runway && state.on_runway,
            lifted_off: was_on_runway && !state.on_runway,
            ground_contact,
        };

        for transition in report.transitions() {
            info!(
                "{:?} at position {:?}, speed {:.3}",
                transition, state.position, state.speed
            );
        }
        debug!(
            "dt {:.4}: speed {:.3}, throttle {:.3}, lift {:.3}, drag {:.3}, attitude {:?}",
            dt, state.speed, state.throttle, state.lift, state.drag, state.attitude
        );

        self.elapsed += dt;
        report
    }

    fn sanitize_timestep(&self, dt: f64) -> f64 {
        if !dt.is_finite() || dt < 0.0 {
            warn!("Invalid timestep {}, advancing by 0 instead", dt);
            return 0.0;
        }

        match self.config.world.max_timestep {
            Some(max_dt) if dt > max_dt => {
                debug!("Clamping timestep {} to {}", dt, max_dt);
                max_dt
            }
            _ => dt,
        }
    }
}
