pub mod aerodynamics;
pub mod attitude;
pub mod controls;
mod dynamics;
pub mod ground;
pub mod propulsion;
mod systems;
pub mod translation;

pub use dynamics::{FlightDynamics, FlightTransition, StepReport};
pub use systems::{aircraft_transform_sync_system, flight_dynamics_system, render_transform};
