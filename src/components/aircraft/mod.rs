pub mod config;
pub mod controls;
pub mod state;
pub mod telemetry;

pub use config::{
    AeroConfig, AttitudeConfig, ConfigError, ControlConfig, FlightConfig, GroundConfig, LiftCurve,
    PropulsionConfig, SmoothingMode, WorldConfig,
};
pub use controls::{axis_target, ControlInput};
pub use state::{body_forward, AircraftState, EulerAttitude};
pub use telemetry::FlightTelemetry;
