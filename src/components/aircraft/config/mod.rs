mod flight;
mod loader;

pub use flight::{
    AeroConfig, AttitudeConfig, ControlConfig, FlightConfig, GroundConfig, LiftCurve,
    PropulsionConfig, SmoothingMode, WorldConfig,
};
pub(crate) use loader::ensure;
pub use loader::ConfigError;
