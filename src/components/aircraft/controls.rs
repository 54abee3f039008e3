use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Discrete control flags for one step, as produced by the host input layer.
///
/// Eight flags are held inputs. `landing_gear` is a one-shot command: the
/// engine consumes the value it is given and reports the toggle in its
/// [`crate::systems::StepReport`]. It never writes back to the caller.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlInput {
    pub throttle: bool,
    pub brake: bool,
    pub left: bool,
    pub right: bool,
    /// Forward stick: drives the pitch axis negative, nose down.
    pub pitch_up: bool,
    /// Back stick: nose up.
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub landing_gear: bool,
}

impl ControlInput {
    /// No inputs held.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Same held inputs with the gear command set.
    pub fn with_gear_toggle(self) -> Self {
        Self {
            landing_gear: true,
            ..self
        }
    }

    /// Same held inputs with the gear command cleared.
    pub fn held(self) -> Self {
        Self {
            landing_gear: false,
            ..self
        }
    }

    /// Pitch target: pitch-up drives -1, pitch-down +1. Pitch-up wins when both are held.
    pub fn pitch_target(&self) -> f64 {
        axis_target(self.pitch_up, -1.0, self.pitch_down)
    }

    /// Roll target: right drives +1, left -1. Right wins when both are held.
    pub fn roll_target(&self) -> f64 {
        axis_target(self.right, 1.0, self.left)
    }

    /// Yaw target: right drives +1, left -1. Opposed pedals cancel.
    pub fn yaw_target(&self) -> f64 {
        f64::from(u8::from(self.yaw_right)) - f64::from(u8::from(self.yaw_left))
    }
}

/// Target in {-1, 0, +1} for an axis driven by two opposed flags.
/// `first` takes precedence over `second` when both are set.
pub fn axis_target(first: bool, first_value: f64, second: bool) -> f64 {
    if first {
        first_value
    } else if second {
        -first_value
    } else {
        0.0
    }
}
