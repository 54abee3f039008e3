use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::{aircraft::config::ensure, ConfigError, ControlInput};

/// A span of time during which a fixed set of controls is held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub label: String,
    /// Seconds.
    pub duration: f64,
    /// Held controls. `landing_gear` toggles the gear once, on entry.
    #[serde(default)]
    pub controls: ControlInput,
}

impl ScriptSegment {
    pub fn new(label: impl Into<String>, duration: f64, controls: ControlInput) -> Self {
        Self {
            label: label.into(),
            duration,
            controls,
        }
    }
}

/// A scripted control timeline played against the flight model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default = "default_timestep")]
    pub timestep: f64,
    /// Emit telemetry every this many steps.
    #[serde(default = "default_sample_every")]
    pub sample_every: usize,
    pub segments: Vec<ScriptSegment>,
}

fn default_timestep() -> f64 {
    1.0 / 60.0
}

fn default_sample_every() -> usize {
    10
}

/// One fixed step of a scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    pub index: usize,
    /// Time at the start of the step.
    pub time: f64,
    pub segment: usize,
    pub controls: ControlInput,
}

impl Scenario {
    /// Roll down the runway, rotate, climb out and raise the gear.
    pub fn takeoff() -> Self {
        let power = ControlInput {
            throttle: true,
            ..Default::default()
        };

        Self {
            name: "takeoff".to_string(),
            timestep: default_timestep(),
            sample_every: default_sample_every(),
            segments: vec![
                ScriptSegment::new("takeoff roll", 4.0, power),
                ScriptSegment::new(
                    "rotate",
                    1.5,
                    ControlInput {
                        pitch_down: true,
                        ..power
                    },
                ),
                ScriptSegment::new("gear up", 3.0, power.with_gear_toggle()),
                ScriptSegment::new(
                    "climbing turn",
                    4.0,
                    ControlInput {
                        right: true,
                        ..power
                    },
                ),
                ScriptSegment::new("idle descent", 4.0, ControlInput::neutral()),
            ],
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let scenario: Scenario = serde_yaml::from_reader(file)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let scenario: Scenario = serde_yaml::from_str(yaml)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(
            self.timestep.is_finite() && self.timestep > 0.0,
            "scenario.timestep",
            "a positive number of seconds",
        )?;
        ensure(self.sample_every > 0, "scenario.sample_every", "at least 1")?;
        ensure(
            !self.segments.is_empty(),
            "scenario.segments",
            "a non-empty list",
        )?;
        for segment in &self.segments {
            ensure(
                segment.duration.is_finite() && segment.duration >= 0.0,
                &format!("duration of segment '{}'", segment.label),
                "non-negative",
            )?;
        }
        Ok(())
    }

    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    fn segment_steps(&self, segment: &ScriptSegment) -> usize {
        (segment.duration / self.timestep).round() as usize
    }

    pub fn step_count(&self) -> usize {
        self.segments.iter().map(|s| self.segment_steps(s)).sum()
    }

    /// Index of the segment active at `time`, `None` once the script has ended.
    pub fn segment_index_at(&self, time: f64) -> Option<usize> {
        let mut end = 0.0;
        for (index, segment) in self.segments.iter().enumerate() {
            end += segment.duration;
            if time < end {
                return Some(index);
            }
        }
        None
    }

    /// Controls held at `time`, without the gear command. Neutral after the end.
    pub fn controls_at(&self, time: f64) -> ControlInput {
        self.segment_index_at(time)
            .map(|index| self.segments[index].controls.held())
            .unwrap_or_default()
    }

    /// Every fixed step of the script in order.
    ///
    /// The gear command of a segment is carried only by its first step.
    pub fn steps(&self) -> impl Iterator<Item = ScriptStep> + '_ {
        self.segments
            .iter()
            .enumerate()
            .flat_map(move |(segment, script)| {
                (0..self.segment_steps(script)).map(move |offset| (segment, script, offset))
            })
            .enumerate()
            .map(move |(index, (segment, script, offset))| {
                let controls = if offset == 0 {
                    script.controls
                } else {
                    script.controls.held()
                };
                ScriptStep {
                    index,
                    time: index as f64 * self.timestep,
                    segment,
                    controls,
                }
            })
    }
}
