//! Drive motor characterized by its torque-speed curve endpoints.

use hoist_core::error::SizingError;

use crate::check::require_positive;

// ---------------------------------------------------------------------------
// Motor
// ---------------------------------------------------------------------------

/// DC gearmotor described by the two endpoints of its linear torque-speed
/// curve: stall torque at zero speed, no-load speed at zero torque.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motor {
    /// No-load speed (RPM).
    pub no_load_rpm: f64,
    /// Stall torque (Nm).
    pub stall_torque: f64,
}

impl Motor {
    /// New motor from stall torque (Nm) and no-load speed (RPM).
    pub const fn new(stall_torque: f64, no_load_rpm: f64) -> Self {
        Self {
            no_load_rpm,
            stall_torque,
        }
    }

    /// Validate both endpoints. Returns Err on non-finite or non-positive
    /// values.
    pub fn validate(&self) -> Result<(), SizingError> {
        require_positive("motor no-load speed", self.no_load_rpm)?;
        require_positive("motor stall torque", self.stall_torque)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
