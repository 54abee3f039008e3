use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Unit forward axis of the airframe in body coordinates.
pub fn body_forward() -> Vector3<f64> {
    Vector3::new(0.0, 0.0, -1.0)
}

/// Euler attitude of the aircraft (radians).
///
/// Angles are applied in yaw-pitch-roll order (Y, then X, then Z), the same
/// order the renderer uses when it consumes the state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAttitude {
    /// Rotation about the lateral (X) axis, positive nose up.
    pub pitch: f64,
    /// Rotation about the vertical (Y) axis, unbounded.
    pub yaw: f64,
    /// Rotation about the longitudinal (Z) axis.
    pub roll: f64,
}

impl EulerAttitude {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Rotation from body to world frame.
    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.pitch)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.roll)
    }

    /// World-space direction the nose points in.
    pub fn forward(&self) -> Vector3<f64> {
        self.to_quaternion() * body_forward()
    }

    /// Compass-style heading in degrees, [0, 360).
    pub fn heading_degrees(&self) -> f64 {
        self.yaw.to_degrees().rem_euclid(360.0)
    }
}

/// Complete kinematic and aerodynamic state of the simulated aircraft.
///
/// Owned by [`crate::systems::FlightDynamics`] and only changed through
/// `FlightDynamics::advance`. Everything outside the engine reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Commanded power level, [0, 1].
    pub throttle: f64,
    /// Scalar forward airspeed, never negative.
    pub speed: f64,
    /// World-space location. `y` is altitude.
    pub position: Vector3<f64>,
    /// Pitch / yaw / roll.
    pub attitude: EulerAttitude,
    /// Per-axis rotation rate: x = pitch, y = yaw, z = roll [rad/s].
    pub angular_velocity: Vector3<f64>,
    /// Lift computed on the last step.
    pub lift: f64,
    /// Drag computed on the last step. Applied to speed on the following step.
    pub drag: f64,
    pub gear_down: bool,
    pub on_runway: bool,
    pub stalling: bool,
    /// Smoothed control axes, [-1, 1].
    pub pitch_input: f64,
    pub roll_input: f64,
    pub yaw_input: f64,
    /// Slowly adapting neutral attitude offsets.
    pub pitch_trim: f64,
    pub roll_trim: f64,
}

impl Default for AircraftState {
    /// Parked at the runway threshold with the gear down.
    fn default() -> Self {
        Self::at_position(Vector3::new(0.0, 0.8, -50.0))
    }
}

impl AircraftState {
    /// Creates a state at rest at the given position.
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            throttle: 0.0,
            speed: 0.0,
            position,
            attitude: EulerAttitude::default(),
            angular_velocity: Vector3::zeros(),
            lift: 0.0,
            drag: 0.0,
            gear_down: true,
            on_runway: false,
            stalling: false,
            pitch_input: 0.0,
            roll_input: 0.0,
            yaw_input: 0.0,
            pitch_trim: 0.0,
            roll_trim: 0.0,
        }
    }

    /// Creates a state in flight at the given position, heading and speed.
    ///
    /// Throttle is set to hold `speed`. Speed is stored as `max_speed * throttle`
    /// so it sits exactly on the throttle target.
    pub fn in_flight(position: Vector3<f64>, yaw: f64, speed: f64, max_speed: f64) -> Self {
        let (throttle, speed) = if max_speed > 0.0 {
            let throttle = (speed / max_speed).clamp(0.0, 1.0);
            (throttle, max_speed * throttle)
        } else {
            (0.0, speed.max(0.0))
        };

        Self {
            throttle,
            speed,
            attitude: EulerAttitude::new(0.0, yaw, 0.0),
            ..Self::at_position(position)
        }
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    /// True if every component of the state is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.throttle,
            self.speed,
            self.attitude.pitch,
            self.attitude.yaw,
            self.attitude.roll,
            self.lift,
            self.drag,
            self.pitch_input,
            self.roll_input,
            self.yaw_input,
            self.pitch_trim,
            self.roll_trim,
        ]
        .iter()
        .chain(self.position.iter())
        .chain(self.angular_velocity.iter())
        .all(|v| v.is_finite())
    }
}
