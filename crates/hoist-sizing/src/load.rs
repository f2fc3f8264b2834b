//! Lifting load model: a mass on a cable wound onto a drum.
//!
//! Required drive torque at the drum is the sum of three contributions:
//! - gravitational: `m · g · r`
//! - acceleration:  `m · a · r`
//! - friction:      `m · g · μ · r`
//!
//! Friction is modeled as a fraction of the gravitational load, the usual
//! first-pass treatment for bushings and cable guides.

use hoist_core::constants::GRAVITY_M_S2;
use hoist_core::error::SizingError;

use crate::check::{require_non_negative, require_positive};

// ---------------------------------------------------------------------------
// LiftLoad
// ---------------------------------------------------------------------------

/// A mass lifted by a cable wound on a drum of the given radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiftLoad {
    /// Mass to lift (kg).
    pub mass: f64,
    /// Drum/pulley radius the cable acts at (m).
    pub drum_radius: f64,
    /// Lift acceleration (m/s^2).
    pub acceleration: f64,
    /// Dimensionless friction coefficient applied to the gravitational load.
    pub friction: f64,
}

impl LiftLoad {
    /// New load with the default 1.0 m/s^2 acceleration and 0.1 friction.
    pub const fn new(mass: f64, drum_radius: f64) -> Self {
        Self {
            mass,
            drum_radius,
            acceleration: 1.0,
            friction: 0.1,
        }
    }

    /// Set lift acceleration (m/s^2).
    pub const fn with_acceleration(mut self, acceleration: f64) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Set the friction coefficient.
    pub const fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    /// Validate all fields. Mass and radius must be strictly positive;
    /// acceleration and friction must be non-negative.
    pub fn validate(&self) -> Result<(), SizingError> {
        require_positive("mass", self.mass)?;
        require_positive("drum radius", self.drum_radius)?;
        require_non_negative("acceleration", self.acceleration)?;
        require_non_negative("friction coefficient", self.friction)?;
        Ok(())
    }

    /// Torque to hold the mass against gravity (Nm).
    pub fn gravity_torque(&self) -> f64 {
        self.mass * GRAVITY_M_S2 * self.drum_radius
    }

    /// Torque to accelerate the mass at the configured rate (Nm).
    pub fn acceleration_torque(&self) -> f64 {
        self.mass * self.acceleration * self.drum_radius
    }

    /// Torque lost to friction (Nm).
    pub fn friction_torque(&self) -> f64 {
        self.mass * GRAVITY_M_S2 * self.friction * self.drum_radius
    }

    /// Total required drive torque at the drum (Nm): gravity, acceleration,
    /// and friction contributions summed.
    ///
    /// Validates eagerly; see [`LiftLoad::validate`].
    pub fn required_torque(&self) -> Result<f64, SizingError> {
        self.validate()?;
        Ok(self.gravity_torque() + self.acceleration_torque() + self.friction_torque())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
