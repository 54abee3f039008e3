pub mod aircraft;
pub mod controller;

pub use aircraft::{
    AeroConfig, AircraftState, AttitudeConfig, ConfigError, ControlConfig, ControlInput,
    EulerAttitude, FlightConfig, FlightTelemetry, GroundConfig, LiftCurve, PropulsionConfig,
    SmoothingMode, WorldConfig,
};
pub use controller::PlayerController;
