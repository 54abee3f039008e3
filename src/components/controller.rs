use bevy::prelude::*;

/// Marks the aircraft driven by the host input layer.
///
/// While `active` is false the aircraft keeps simulating on neutral inputs and
/// gear requests are discarded.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerController {
    pub active: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }

    /// Controller that ignores inputs until activated.
    pub fn disabled() -> Self {
        Self { active: false }
    }
}
