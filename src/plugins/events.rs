use bevy::prelude::*;

use crate::systems::FlightTransition;

/// Host request to toggle the landing gear of the player aircraft.
///
/// Consumed by the next flight step.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct GearToggleRequest;

/// The gear of `entity` was toggled during the last step.
#[derive(Event, Debug, Clone, Copy)]
pub struct GearToggled {
    pub entity: Entity,
    pub gear_down: bool,
}

/// `entity` changed flight mode during the last step.
#[derive(Event, Debug, Clone, Copy)]
pub struct FlightModeChanged {
    pub entity: Entity,
    pub transition: FlightTransition,
}
