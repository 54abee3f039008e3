pub mod flight;

pub use flight::{
    aircraft_transform_sync_system, flight_dynamics_system, render_transform, FlightDynamics,
    FlightTransition, StepReport,
};
