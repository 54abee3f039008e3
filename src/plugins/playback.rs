use bevy::prelude::*;
use std::io::{self, Write};
use thiserror::Error;

use crate::{
    components::ControlInput,
    plugins::GearToggleRequest,
    resources::Scenario,
    systems::FlightDynamics,
};

#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Player aircraft was not spawned")]
    NoAircraft,
    #[error("Player aircraft despawned during playback")]
    Despawned,
    #[error("Failed to write telemetry: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode telemetry: {0}")]
    Json(#[from] serde_json::Error),
}

/// Runs Startup on the first update and rewinds the idle step that update took.
///
/// Call once, before any other update. Returns the player aircraft.
pub fn start_flight(app: &mut App) -> Result<Entity, PlaybackError> {
    app.update();

    let world = app.world_mut();
    let aircraft = world
        .query_filtered::<Entity, With<FlightDynamics>>()
        .get_single(world)
        .map_err(|_| PlaybackError::NoAircraft)?;
    if let Some(mut dynamics) = world.get_mut::<FlightDynamics>(aircraft) {
        dynamics.reset();
    }
    Ok(aircraft)
}

/// Plays `scenario` through a manually stepped app, one update per script step.
///
/// Writes a JSON telemetry line before the first step and then after every
/// `sample_every` steps.
pub fn play_scenario(
    app: &mut App,
    aircraft: Entity,
    scenario: &Scenario,
    out: &mut impl Write,
) -> Result<(), PlaybackError> {
    info!(
        "Running scenario '{}': {} segments, {:.1}s in {} steps",
        scenario.name,
        scenario.segments.len(),
        scenario.total_duration(),
        scenario.step_count()
    );
    write_telemetry(app, aircraft, out)?;

    let mut segment = None;
    for step in scenario.steps() {
        if segment != Some(step.segment) {
            segment = Some(step.segment);
            let label = &scenario.segments[step.segment].label;
            info!("t={:.2}s segment '{}'", step.time, label);
        }

        let world = app.world_mut();
        *world
            .get_mut::<ControlInput>(aircraft)
            .ok_or(PlaybackError::Despawned)? = step.controls.held();
        if step.controls.landing_gear {
            world.send_event(GearToggleRequest);
        }

        app.update();

        if (step.index + 1) % scenario.sample_every == 0 {
            write_telemetry(app, aircraft, out)?;
        }
    }

    Ok(())
}

fn write_telemetry(app: &App, aircraft: Entity, out: &mut impl Write) -> Result<(), PlaybackError> {
    let dynamics = app
        .world()
        .get::<FlightDynamics>(aircraft)
        .ok_or(PlaybackError::Despawned)?;
    writeln!(out, "{}", serde_json::to_string(&dynamics.telemetry())?)?;
    Ok(())
}
