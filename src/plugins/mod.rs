mod events;
mod flight;
mod playback;
mod staging;

pub use events::{FlightModeChanged, GearToggleRequest, GearToggled};
pub use flight::{FlightDynamicsPlugin, FlightSet};
pub use playback::{play_scenario, start_flight, PlaybackError};
pub use staging::{StartupSequencePlugin, StartupStage};
