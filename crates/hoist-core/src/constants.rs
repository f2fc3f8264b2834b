//! Physical and unit-conversion constants shared across the workspace.

/// Standard gravitational acceleration (m/s^2).
pub const GRAVITY_M_S2: f64 = 9.81;

/// Seconds per minute, for RPM <-> per-second rate conversions.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Centimeters per meter.  Pulley diameters enter in cm and are converted
/// exactly once, at the configuration boundary.
pub const CM_PER_M: f64 = 100.0;
