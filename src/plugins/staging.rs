use bevy::prelude::*;

/// Ordered startup sets; resources are in place before any aircraft spawns.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildUtilities,
    BuildAircraft,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (StartupStage::BuildUtilities, StartupStage::BuildAircraft).chain(),
        );
    }
}
