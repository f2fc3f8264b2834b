//! Projects a motor through a gear train onto drum-side performance.

use serde::{Deserialize, Serialize};

use hoist_core::constants::GRAVITY_M_S2;
use hoist_core::error::SizingError;

use crate::check::require_positive_divisor;
use crate::gearing::{GearTrain, speed_for_drum_rpm};
use crate::motor::Motor;

// ---------------------------------------------------------------------------
// DerivedSpec
// ---------------------------------------------------------------------------

/// Drum-side performance of a motor + gear train + drum combination.
///
/// Produced as one record by [`project`]; the four values always describe
/// the same combination.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedSpec {
    /// Drum speed at motor no-load speed (RPM).
    pub output_rpm: f64,
    /// Drum torque at motor stall, after train losses (Nm).
    pub output_torque: f64,
    /// Linear cable speed at `output_rpm` (m/s).
    pub linear_speed: f64,
    /// Static holding capacity (kg): the mass `output_torque` can hold
    /// against gravity alone at this drum radius.  Carries no acceleration
    /// or friction term; the demand side, `LiftLoad::required_torque`, does.
    pub max_mass: f64,
}

// ---------------------------------------------------------------------------
// project
// ---------------------------------------------------------------------------

/// Project `motor` through `train` onto a drum of `drum_diameter` (m).
///
/// - `output_rpm = no_load_rpm / ratio`
/// - `output_torque = stall_torque × ratio × efficiency`
/// - `linear_speed = output_rpm × π × diameter / 60`
/// - `max_mass = output_torque / (g × diameter / 2)`
pub fn project(
    motor: &Motor,
    train: &GearTrain,
    drum_diameter: f64,
) -> Result<DerivedSpec, SizingError> {
    motor.validate()?;
    train.validate()?;
    require_positive_divisor("pulley diameter", drum_diameter)?;

    let output_rpm = train.output_rpm(motor.no_load_rpm);
    let output_torque = train.output_torque(motor.stall_torque);
    let linear_speed = speed_for_drum_rpm(output_rpm, drum_diameter);
    let max_mass = output_torque / (GRAVITY_M_S2 * drum_diameter / 2.0);

    Ok(DerivedSpec {
        output_rpm,
        output_torque,
        linear_speed,
        max_mass,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
