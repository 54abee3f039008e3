use bevy::prelude::*;

use crate::{
    components::{AircraftState, ControlInput, PlayerController},
    plugins::{FlightModeChanged, GearToggleRequest, GearToggled},
    resources::PhysicsConfig,
    systems::flight::FlightDynamics,
};

/// Advances every player aircraft by one physics timestep.
///
/// Held inputs come from the entity's `ControlInput`; the gear command comes
/// only from `GearToggleRequest` events. Several requests arriving within one
/// step collapse into a single toggle.
pub fn flight_dynamics_system(
    mut query: Query<(
        Entity,
        &mut FlightDynamics,
        &ControlInput,
        &PlayerController,
    )>,
    mut gear_requests: EventReader<GearToggleRequest>,
    mut gear_events: EventWriter<GearToggled>,
    mut mode_events: EventWriter<FlightModeChanged>,
    physics: Res<PhysicsConfig>,
) {
    let dt = physics.timestep;
    let gear_requested = gear_requests.read().count() > 0;

    for (entity, mut dynamics, controls, controller) in query.iter_mut() {
        let input = if controller.active {
            ControlInput {
                landing_gear: gear_requested,
                ..*controls
            }
        } else {
            ControlInput::neutral()
        };

        let report = dynamics.advance(input, dt);

        if report.gear_toggled {
            gear_events.send(GearToggled {
                entity,
                gear_down: dynamics.state().gear_down,
            });
        }

        for transition in report.transitions() {
            mode_events.send(FlightModeChanged { entity, transition });
        }
    }
}

/// Render-space transform for an aircraft state (yaw-pitch-roll order).
pub fn render_transform(state: &AircraftState) -> Transform {
    let position = &state.position;
    let attitude = &state.attitude;

    Transform::from_xyz(position.x as f32, position.y as f32, position.z as f32).with_rotation(
        Quat::from_euler(
            EulerRot::YXZ,
            attitude.yaw as f32,
            attitude.pitch as f32,
            attitude.roll as f32,
        ),
    )
}

/// Copies the simulated pose onto the entity `Transform` for the renderer and camera.
pub fn aircraft_transform_sync_system(mut query: Query<(&FlightDynamics, &mut Transform)>) {
    for (dynamics, mut transform) in query.iter_mut() {
        let pose = render_transform(dynamics.state());
        transform.translation = pose.translation;
        transform.rotation = pose.rotation;
    }
}
