//! Gear train model, drum kinematics, and ratio selection.
//!
//! # Gear Ratio Convention
//!
//! `ratio = motor speed / drum speed`:
//! - `ratio > 1` means speed reduction / torque multiplication.
//! - Drum torque = motor torque × `ratio` × efficiency.
//! - Drum speed = motor speed / `ratio`.

use std::f64::consts::PI;

use hoist_core::constants::SECONDS_PER_MINUTE;
use hoist_core::error::SizingError;

use crate::check::{require_efficiency, require_positive, require_positive_divisor};
use crate::motor::Motor;

// ---------------------------------------------------------------------------
// GearTrain
// ---------------------------------------------------------------------------

/// Reduction gear train between motor and drum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GearTrain {
    /// Gear ratio (motor/drum).  `> 1` means speed reduction.
    pub ratio: f64,
    /// Forward efficiency in (0, 1].  Fraction of torque transmitted.
    pub efficiency: f64,
}

impl Default for GearTrain {
    fn default() -> Self {
        Self::direct()
    }
}

impl GearTrain {
    /// Direct drive (1:1 ratio, lossless).
    pub const fn direct() -> Self {
        Self {
            ratio: 1.0,
            efficiency: 1.0,
        }
    }

    /// New train with the given gear ratio and 85% default efficiency.
    pub const fn new(ratio: f64) -> Self {
        Self {
            ratio,
            efficiency: 0.85,
        }
    }

    /// Set forward efficiency.  Out-of-range values are rejected by
    /// [`GearTrain::validate`], not clamped.
    pub const fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }

    /// Validate ratio and efficiency.
    pub fn validate(&self) -> Result<(), SizingError> {
        require_positive_divisor("gear ratio", self.ratio)?;
        require_efficiency(self.efficiency)?;
        Ok(())
    }

    /// Drum speed for a motor speed (RPM in, RPM out).
    pub fn output_rpm(&self, motor_rpm: f64) -> f64 {
        motor_rpm / self.ratio
    }

    /// Drum torque for a motor torque (Nm), after train losses.
    pub fn output_torque(&self, motor_torque: f64) -> f64 {
        motor_torque * self.ratio * self.efficiency
    }
}

// ---------------------------------------------------------------------------
// Drum kinematics
// ---------------------------------------------------------------------------

/// Drum speed (RPM) that winds cable at `linear_speed` (m/s) on a drum of
/// `drum_diameter` (m).  Assumes a positive diameter.
pub fn drum_rpm_for_speed(linear_speed: f64, drum_diameter: f64) -> f64 {
    linear_speed * SECONDS_PER_MINUTE / (PI * drum_diameter)
}

/// Linear cable speed (m/s) at `drum_rpm` on a drum of `drum_diameter` (m).
pub fn speed_for_drum_rpm(drum_rpm: f64, drum_diameter: f64) -> f64 {
    drum_rpm * PI * drum_diameter / SECONDS_PER_MINUTE
}

// ---------------------------------------------------------------------------
// Optimal ratio
// ---------------------------------------------------------------------------

/// Theoretical gear ratio that reaches `target_speed` (m/s) at the drum.
///
/// Divides the motor's no-load speed by the drum speed the target requires,
/// then divides by `efficiency` so the selected reduction carries margin for
/// train losses.  Projecting the unrounded result back through
/// [`crate::projection::project`] with the same efficiency therefore yields
/// a linear speed of `efficiency × target_speed`.
pub fn optimal_ratio(
    motor: &Motor,
    drum_diameter: f64,
    target_speed: f64,
    efficiency: f64,
) -> Result<f64, SizingError> {
    motor.validate()?;
    require_positive_divisor("pulley diameter", drum_diameter)?;
    require_positive_divisor("target speed", target_speed)?;
    if efficiency == 0.0 {
        return Err(SizingError::DivideByZero {
            quantity: "efficiency",
        });
    }
    require_efficiency(efficiency)?;

    let required_drum_rpm = drum_rpm_for_speed(target_speed, drum_diameter);
    Ok(motor.no_load_rpm / required_drum_rpm / efficiency)
}

// ---------------------------------------------------------------------------
// RatioCatalog
// ---------------------------------------------------------------------------

/// Catalog of buildable gear ratios, held ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct RatioCatalog {
    ratios: Vec<f64>,
}

impl RatioCatalog {
    /// The stock catalog: 5:1, 7:1, 10:1, 15:1, 20:1.
    pub fn standard() -> Self {
        Self {
            ratios: vec![5.0, 7.0, 10.0, 15.0, 20.0],
        }
    }

    /// New catalog from candidate ratios.
    ///
    /// Rejects empty sets and non-positive or non-finite members.  Members
    /// are sorted ascending so ties in [`RatioCatalog::nearest`] resolve to
    /// the smaller ratio.
    pub fn new(candidates: Vec<f64>) -> Result<Self, SizingError> {
        if candidates.is_empty() {
            return Err(SizingError::EmptyCatalog);
        }
        for &ratio in &candidates {
            require_positive("catalog ratio", ratio)?;
        }
        let mut ratios = candidates;
        ratios.sort_by(f64::total_cmp);
        Ok(Self { ratios })
    }

    /// The candidate ratios, ascending.
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// The catalog member closest to `target` by absolute difference.
    /// Equidistant candidates resolve to the smaller ratio.
    ///
    /// Total for every finite `target`; the catalog is never empty by
    /// construction.
    pub fn nearest(&self, target: f64) -> f64 {
        let mut best = self.ratios[0];
        let mut best_distance = (self.ratios[0] - target).abs();
        for &ratio in &self.ratios[1..] {
            let distance = (ratio - target).abs();
            if distance < best_distance {
                best = ratio;
                best_distance = distance;
            }
        }
        best
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
