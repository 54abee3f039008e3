use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{aircraft::config::ensure, ConfigError};

/// How the flight step is scheduled inside the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpdateMode {
    /// Runs on `FixedUpdate` at `timestep`, decoupled from the frame rate.
    #[default]
    Fixed,
    /// One step per `App::update`, for headless drivers and tests.
    Manual,
}

/// Step timing shared by every aircraft in the app.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Seconds simulated per flight step.
    pub timestep: f64,
    pub update_mode: UpdateMode,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0, // 60 Hz
            update_mode: UpdateMode::Fixed,
        }
    }
}

impl PhysicsConfig {
    pub fn manual(timestep: f64) -> Self {
        Self {
            timestep,
            update_mode: UpdateMode::Manual,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(
            self.timestep.is_finite() && self.timestep > 0.0,
            "physics.timestep",
            "a positive number of seconds",
        )
    }
}
