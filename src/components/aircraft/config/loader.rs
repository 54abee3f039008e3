use std::path::Path;
use thiserror::Error;

use crate::components::aircraft::config::flight::FlightConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid flight configuration: {0}")]
    ValidationError(String),
}

/// Fails with a `ValidationError` naming `field` unless `ok` holds.
pub(crate) fn ensure(ok: bool, field: &str, requirement: &str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{} must be {}",
            field, requirement
        )))
    }
}

fn finite_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn finite_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl FlightConfig {
    /// Reads and validates a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: FlightConfig = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: FlightConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Checks the ranges the integrator relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.propulsion;
        ensure(finite_positive(p.max_speed), "propulsion.max_speed", "positive")?;
        ensure(
            finite_non_negative(p.throttle_rate),
            "propulsion.throttle_rate",
            "non-negative",
        )?;
        ensure(
            finite_non_negative(p.idle_deceleration),
            "propulsion.idle_deceleration",
            "non-negative",
        )?;

        let a = &self.aero;
        ensure(finite_non_negative(a.stall_speed), "aero.stall_speed", "non-negative")?;
        ensure(
            finite_non_negative(a.drag_coefficient),
            "aero.drag_coefficient",
            "non-negative",
        )?;
        ensure(
            finite_non_negative(a.lift_coefficient),
            "aero.lift_coefficient",
            "non-negative",
        )?;
        ensure(
            finite_non_negative(a.stall_lift_factor),
            "aero.stall_lift_factor",
            "non-negative",
        )?;
        ensure(
            a.lift_curve.low_aoa < a.lift_curve.high_aoa,
            "aero.lift_curve.low_aoa",
            "below high_aoa",
        )?;
        ensure(
            finite_non_negative(a.lift_curve.min_effect),
            "aero.lift_curve.min_effect",
            "non-negative",
        )?;

        let g = &self.ground;
        ensure(g.ground_height.is_finite(), "ground.ground_height", "finite")?;
        ensure(g.min_clearance.is_finite(), "ground.min_clearance", "finite")?;
        ensure(finite_positive(g.takeoff_speed), "ground.takeoff_speed", "positive")?;
        ensure(
            finite_non_negative(g.min_lift_speed) && g.min_lift_speed <= g.takeoff_speed,
            "ground.min_lift_speed",
            "between 0 and takeoff_speed",
        )?;
        ensure(
            finite_non_negative(g.runway_half_width) && finite_non_negative(g.runway_half_length),
            "ground.runway_half_width/half_length",
            "non-negative",
        )?;
        ensure(finite_non_negative(g.gravity), "ground.gravity", "non-negative")?;
        ensure(
            (0.0..=1.0).contains(&g.ground_rate_damping),
            "ground.ground_rate_damping",
            "within [0, 1]",
        )?;
        ensure(
            finite_non_negative(g.runway_friction) && finite_non_negative(g.rough_friction),
            "ground.runway_friction/rough_friction",
            "non-negative",
        )?;

        let c = &self.controls;
        ensure(
            finite_non_negative(c.smoothing_rate),
            "controls.smoothing_rate",
            "non-negative",
        )?;
        ensure(
            finite_non_negative(c.pitch_trim_limit),
            "controls.pitch_trim_limit",
            "non-negative",
        )?;
        ensure(
            finite_non_negative(c.roll_trim_limit),
            "controls.roll_trim_limit",
            "non-negative",
        )?;
        ensure(
            finite_non_negative(c.pitch_trim_rate) && finite_non_negative(c.roll_trim_rate),
            "controls.pitch_trim_rate/roll_trim_rate",
            "non-negative",
        )?;

        let t = &self.attitude;
        ensure(
            finite_positive(t.effectiveness_speed),
            "attitude.effectiveness_speed",
            "positive",
        )?;
        ensure(
            (0.0..=1.0).contains(&t.min_effectiveness),
            "attitude.min_effectiveness",
            "within [0, 1]",
        )?;
        ensure(finite_non_negative(t.damping), "attitude.damping", "non-negative")?;
        ensure(
            t.pitch_limit > 0.0 && t.pitch_limit <= std::f64::consts::FRAC_PI_2,
            "attitude.pitch_limit",
            "within (0, pi/2]",
        )?;
        ensure(
            t.roll_limit > 0.0 && t.roll_limit <= std::f64::consts::PI,
            "attitude.roll_limit",
            "within (0, pi]",
        )?;

        let w = &self.world;
        ensure(finite_positive(w.half_extent), "world.half_extent", "positive")?;
        ensure(
            w.ceiling.is_finite() && w.ceiling > g.ground_height,
            "world.ceiling",
            "above ground.ground_height",
        )?;
        ensure(
            w.start_position.iter().all(|v| v.is_finite()),
            "world.start_position",
            "finite",
        )?;
        if let Some(max) = w.max_timestep {
            ensure(finite_positive(max), "world.max_timestep", "positive")?;
        }

        let curve = &a.lift_curve;
        for (field, value) in [
            ("aero.stall_min_altitude", a.stall_min_altitude),
            ("aero.lift_curve.low_aoa", curve.low_aoa),
            ("aero.lift_curve.high_aoa", curve.high_aoa),
            ("aero.lift_curve.low_effect", curve.low_effect),
            ("aero.lift_curve.base_effect", curve.base_effect),
            ("aero.lift_curve.linear_slope", curve.linear_slope),
            ("aero.lift_curve.peak_effect", curve.peak_effect),
            ("aero.lift_curve.falloff_slope", curve.falloff_slope),
            ("ground.runway_tolerance", g.runway_tolerance),
            ("ground.stall_gravity_factor", g.stall_gravity_factor),
            ("ground.rest_pitch", g.rest_pitch),
            ("ground.rest_pitch_speed", g.rest_pitch_speed),
            ("ground.rest_pitch_rate", g.rest_pitch_rate),
            ("controls.trim_input_deadband", c.trim_input_deadband),
            ("controls.trim_min_speed", c.trim_min_speed),
            ("attitude.min_control_speed", t.min_control_speed),
            ("attitude.pitch_authority", t.pitch_authority),
            ("attitude.roll_authority", t.roll_authority),
            ("attitude.yaw_authority", t.yaw_authority),
            ("attitude.stability", t.stability),
            ("attitude.pitch_stability", t.pitch_stability),
            ("attitude.roll_stability", t.roll_stability),
            ("attitude.yaw_stability", t.yaw_stability),
        ] {
            ensure(value.is_finite(), field, "finite")?;
        }

        Ok(())
    }
}
