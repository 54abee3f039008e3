use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

/// Every tunable constant of the flight model.
///
/// Defaults reproduce the reference flight feel. All sections are optional
/// in YAML; missing fields take their default.
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub propulsion: PropulsionConfig,
    pub aero: AeroConfig,
    pub ground: GroundConfig,
    pub controls: ControlConfig,
    pub attitude: AttitudeConfig,
    pub world: WorldConfig,
}

/// Throttle ramp and speed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropulsionConfig {
    /// Throttle change per second while throttle or brake is held.
    pub throttle_rate: f64,
    /// Speed at full throttle.
    pub max_speed: f64,
    /// Speed lost per second with the throttle closed.
    pub idle_deceleration: f64,
}

impl Default for PropulsionConfig {
    fn default() -> Self {
        Self {
            throttle_rate: 0.5,
            max_speed: 3.5,
            idle_deceleration: 0.12,
        }
    }
}

/// Piecewise lift response keyed on pitch angle.
///
/// ```text
/// a <  low_aoa              -> low_effect
/// low_aoa <= a <= high_aoa  -> base_effect + linear_slope * a
/// a >  high_aoa             -> peak_effect - falloff_slope * (a - high_aoa)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftCurve {
    pub low_aoa: f64,
    pub high_aoa: f64,
    pub low_effect: f64,
    pub base_effect: f64,
    pub linear_slope: f64,
    pub peak_effect: f64,
    pub falloff_slope: f64,
    /// Floor applied to the effect before it scales lift.
    pub min_effect: f64,
}

impl Default for LiftCurve {
    fn default() -> Self {
        Self {
            low_aoa: -0.3,
            high_aoa: 0.35,
            low_effect: 0.2,
            base_effect: 1.0,
            linear_slope: 3.0,
            peak_effect: 2.0,
            falloff_slope: 2.0,
            min_effect: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroConfig {
    /// Below this speed an airborne aircraft stalls.
    pub stall_speed: f64,
    /// Stall is only declared above this altitude.
    pub stall_min_altitude: f64,
    pub drag_coefficient: f64,
    pub lift_coefficient: f64,
    pub lift_curve: LiftCurve,
    /// Lift multiplier while stalling.
    pub stall_lift_factor: f64,
}

impl Default for AeroConfig {
    fn default() -> Self {
        Self {
            stall_speed: 0.3,
            stall_min_altitude: 2.0,
            drag_coefficient: 0.08,
            lift_coefficient: 0.3,
            lift_curve: LiftCurve::default(),
            stall_lift_factor: 0.2,
        }
    }
}

/// Runway geometry, vertical integration and ground contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub ground_height: f64,
    /// Lowest altitude the ground clamp will ever produce.
    pub min_clearance: f64,
    pub runway_half_width: f64,
    pub runway_half_length: f64,
    /// Altitude above ground still counted as on the runway.
    pub runway_tolerance: f64,
    /// Full lift applies above this speed.
    pub takeoff_speed: f64,
    /// No lift applies at or below this speed.
    pub min_lift_speed: f64,
    /// Sink rate off the runway.
    pub gravity: f64,
    pub stall_gravity_factor: f64,
    /// Speed lost per second on runway contact.
    pub runway_friction: f64,
    /// Speed lost per second on contact away from the runway.
    pub rough_friction: f64,
    /// Pitch and roll rate multiplier on runway contact.
    pub ground_rate_damping: f64,
    /// Tail-dragger rest attitude.
    pub rest_pitch: f64,
    /// Below this speed the nose settles onto `rest_pitch`.
    pub rest_pitch_speed: f64,
    pub rest_pitch_rate: f64,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            ground_height: 0.8,
            min_clearance: 0.5,
            runway_half_width: 25.0,
            runway_half_length: 100.0,
            runway_tolerance: 0.1,
            takeoff_speed: 0.8,
            min_lift_speed: 0.4,
            gravity: 0.3,
            stall_gravity_factor: 2.5,
            runway_friction: 0.2,
            rough_friction: 0.8,
            ground_rate_damping: 0.92,
            rest_pitch: 0.08,
            rest_pitch_speed: 0.3,
            rest_pitch_rate: 1.0,
        }
    }
}

/// How smoothed inputs approach their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SmoothingMode {
    /// `input += (target - input) * rate * dt`. Framerate dependent and only
    /// stable while `dt` is small relative to `1 / rate`.
    #[default]
    Linear,
    /// `input += (target - input) * (1 - exp(-rate * dt))`. Independent of
    /// how the elapsed time is sliced.
    Exact,
}

/// Input smoothing and auto-trim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub smoothing_rate: f64,
    pub smoothing: SmoothingMode,
    /// Trim only adapts while the smoothed input is inside this band.
    pub trim_input_deadband: f64,
    pub trim_min_speed: f64,
    pub pitch_trim_rate: f64,
    pub pitch_trim_limit: f64,
    pub roll_trim_rate: f64,
    pub roll_trim_limit: f64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            smoothing_rate: 15.0,
            smoothing: SmoothingMode::Linear,
            trim_input_deadband: 0.1,
            trim_min_speed: 0.4,
            pitch_trim_rate: 0.3,
            pitch_trim_limit: 0.3,
            roll_trim_rate: 0.5,
            roll_trim_limit: 0.2,
        }
    }
}

/// Control authority, static stability and rate damping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttitudeConfig {
    /// Controls and stability act only above this speed.
    pub min_control_speed: f64,
    /// Speed at which control effectiveness saturates.
    pub effectiveness_speed: f64,
    pub min_effectiveness: f64,
    pub pitch_authority: f64,
    pub roll_authority: f64,
    pub yaw_authority: f64,
    /// Common scale on the restoring terms.
    pub stability: f64,
    pub pitch_stability: f64,
    pub roll_stability: f64,
    pub yaw_stability: f64,
    /// Fraction of angular rate removed per second.
    pub damping: f64,
    pub pitch_limit: f64,
    pub roll_limit: f64,
}

impl Default for AttitudeConfig {
    fn default() -> Self {
        Self {
            min_control_speed: 0.1,
            effectiveness_speed: 0.6,
            min_effectiveness: 0.1,
            pitch_authority: 1.0,
            roll_authority: 1.4,
            yaw_authority: 0.8,
            stability: 0.6,
            pitch_stability: 1.2,
            roll_stability: 1.8,
            yaw_stability: 0.5,
            damping: 2.8,
            pitch_limit: FRAC_PI_3,
            roll_limit: FRAC_PI_2,
        }
    }
}

/// World extent and start conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// x and z wrap around at +/- this value.
    pub half_extent: f64,
    /// Altitude cap.
    pub ceiling: f64,
    pub start_position: Vector3<f64>,
    /// Upper bound applied to each step's `dt`. `None` leaves large steps alone.
    pub max_timestep: Option<f64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            half_extent: 800.0,
            ceiling: 200.0,
            start_position: Vector3::new(0.0, 0.8, -50.0),
            max_timestep: None,
        }
    }
}
