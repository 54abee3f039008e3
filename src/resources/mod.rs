pub mod config;
mod scenario;

pub use config::{PhysicsConfig, UpdateMode};
pub use scenario::{Scenario, ScriptSegment, ScriptStep};
