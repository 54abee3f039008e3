use bevy::{log::LogPlugin, prelude::*};
use std::{env, error::Error, io};

use flyer_lite::{
    components::FlightConfig,
    plugins::{play_scenario, start_flight, FlightDynamicsPlugin},
    resources::{PhysicsConfig, Scenario},
};

/// Usage: flyer_headless [scenario.yaml] [flight.yaml]
///
/// Plays a control script against the flight model and prints one JSON
/// telemetry record per sample on stdout.
fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let scenario = match args.get(1) {
        Some(path) => Scenario::load(path)?,
        None => Scenario::takeoff(),
    };
    let config = match args.get(2) {
        Some(path) => FlightConfig::load(path)?,
        None => FlightConfig::default(),
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(
            FlightDynamicsPlugin::new(config)
                .with_physics(PhysicsConfig::manual(scenario.timestep)),
        );

    let aircraft = start_flight(&mut app)?;
    play_scenario(&mut app, aircraft, &scenario, &mut io::stdout().lock())?;

    Ok(())
}
