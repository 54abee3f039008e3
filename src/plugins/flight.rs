use bevy::prelude::*;

use crate::{
    components::{ControlInput, FlightConfig, PlayerController},
    plugins::{
        FlightModeChanged, GearToggleRequest, GearToggled, StartupSequencePlugin, StartupStage,
    },
    resources::{PhysicsConfig, UpdateMode},
    systems::{
        aircraft_transform_sync_system, flight_dynamics_system, render_transform, FlightDynamics,
    },
};

/// Flight step stages, run in order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Dynamics,
    Sync,
}

/// Spawns the player aircraft and steps it every physics tick.
pub struct FlightDynamicsPlugin {
    config: FlightConfig,
    physics: PhysicsConfig,
}

impl Default for FlightDynamicsPlugin {
    fn default() -> Self {
        Self::new(FlightConfig::default())
    }
}

impl FlightDynamicsPlugin {
    pub fn new(config: FlightConfig) -> Self {
        Self {
            config,
            physics: PhysicsConfig::default(),
        }
    }

    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    fn report_config(config: Res<FlightConfig>, physics: Res<PhysicsConfig>) {
        if let Err(e) = config.validate() {
            warn!("Flight configuration out of range: {}", e);
        }
        if let Err(e) = physics.validate() {
            warn!("Physics configuration out of range: {}", e);
        }
        info!(
            "Flight model: max speed {}, stall speed {}, timestep {:.4}s ({:?})",
            config.propulsion.max_speed,
            config.aero.stall_speed,
            physics.timestep,
            physics.update_mode
        );
    }

    fn spawn_aircraft(mut commands: Commands, config: Res<FlightConfig>) {
        let dynamics = FlightDynamics::new(config.clone());
        let transform = render_transform(dynamics.state());

        let position = dynamics.state().position;
        info!("Spawning player aircraft at {:?}", position);
        commands.spawn((
            dynamics,
            ControlInput::default(),
            PlayerController::new(),
            transform,
            Name::new("Player Aircraft"),
        ));
    }
}

impl Plugin for FlightDynamicsPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StartupSequencePlugin>() {
            app.add_plugins(StartupSequencePlugin);
        }

        app.insert_resource(self.config.clone())
            .insert_resource(self.physics.clone())
            .add_event::<GearToggleRequest>()
            .add_event::<GearToggled>()
            .add_event::<FlightModeChanged>()
            .add_systems(
                Startup,
                (
                    Self::report_config.in_set(StartupStage::BuildUtilities),
                    Self::spawn_aircraft.in_set(StartupStage::BuildAircraft),
                ),
            );

        let flight_systems = (
            flight_dynamics_system.in_set(FlightSet::Dynamics),
            aircraft_transform_sync_system.in_set(FlightSet::Sync),
        );

        match self.physics.update_mode {
            UpdateMode::Fixed => {
                app.configure_sets(FixedUpdate, (FlightSet::Dynamics, FlightSet::Sync).chain())
                    .add_systems(FixedUpdate, flight_systems);

                // Time<Fixed> panics on a zero or negative period.
                if self.physics.validate().is_ok() {
                    app.insert_resource(Time::<Fixed>::from_seconds(self.physics.timestep));
                }
            }
            UpdateMode::Manual => {
                app.configure_sets(Update, (FlightSet::Dynamics, FlightSet::Sync).chain())
                    .add_systems(Update, flight_systems);
            }
        }
    }
}
