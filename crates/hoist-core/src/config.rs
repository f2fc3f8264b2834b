use serde::{Deserialize, Serialize};

use crate::constants::CM_PER_M;
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_mass_kg() -> f64 {
    2.0
}
const fn default_pulley_diameter_cm() -> f64 {
    2.0
}
const fn default_acceleration_m_s2() -> f64 {
    1.0
}
const fn default_friction() -> f64 {
    0.1
}
const fn default_no_load_rpm() -> f64 {
    6000.0
}
const fn default_stall_torque_nm() -> f64 {
    0.17
}
const fn default_target_speed_m_s() -> f64 {
    0.8
}
const fn default_efficiency() -> f64 {
    0.85
}
fn default_candidate_ratios() -> Vec<f64> {
    vec![5.0, 7.0, 10.0, 15.0, 20.0]
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn check_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidValue {
            field: field.into(),
            message: format!("must be a positive finite number, got {value}"),
        });
    }
    Ok(())
}

fn check_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidValue {
            field: field.into(),
            message: format!("must be a non-negative finite number, got {value}"),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// LoadConfig
// ---------------------------------------------------------------------------

/// The load to be lifted and the drum it winds onto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Mass to lift (kg, default: 2.0).
    #[serde(default = "default_mass_kg")]
    pub mass_kg: f64,

    /// Pulley/drum diameter (cm, default: 2.0).  Converted to meters exactly
    /// once, via [`LoadConfig::pulley_diameter_m`].
    #[serde(default = "default_pulley_diameter_cm")]
    pub pulley_diameter_cm: f64,

    /// Lift acceleration (m/s^2, default: 1.0).
    #[serde(default = "default_acceleration_m_s2")]
    pub acceleration_m_s2: f64,

    /// Dimensionless friction coefficient (default: 0.1).
    #[serde(default = "default_friction")]
    pub friction: f64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            mass_kg: default_mass_kg(),
            pulley_diameter_cm: default_pulley_diameter_cm(),
            acceleration_m_s2: default_acceleration_m_s2(),
            friction: default_friction(),
        }
    }
}

impl LoadConfig {
    /// Pulley diameter in meters.
    pub fn pulley_diameter_m(&self) -> f64 {
        self.pulley_diameter_cm / CM_PER_M
    }

    /// Pulley radius in meters.
    pub fn pulley_radius_m(&self) -> f64 {
        self.pulley_diameter_m() / 2.0
    }
}

// ---------------------------------------------------------------------------
// MotorConfig
// ---------------------------------------------------------------------------

/// The drive motor, characterized by its torque-speed endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorConfig {
    /// No-load speed (RPM, default: 6000).
    #[serde(default = "default_no_load_rpm")]
    pub no_load_rpm: f64,

    /// Stall torque (Nm, default: 0.17).
    #[serde(default = "default_stall_torque_nm")]
    pub stall_torque_nm: f64,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            no_load_rpm: default_no_load_rpm(),
            stall_torque_nm: default_stall_torque_nm(),
        }
    }
}

// ---------------------------------------------------------------------------
// DriveConfig
// ---------------------------------------------------------------------------

/// Drivetrain targets and the catalog of buildable gear ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveConfig {
    /// Desired linear lift speed (m/s, default: 0.8).
    #[serde(default = "default_target_speed_m_s")]
    pub target_speed_m_s: f64,

    /// Gear train efficiency in (0, 1] (default: 0.85).
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,

    /// Candidate gear ratios to round the theoretical ratio to
    /// (default: [5, 7, 10, 15, 20]).
    #[serde(default = "default_candidate_ratios")]
    pub candidate_ratios: Vec<f64>,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            target_speed_m_s: default_target_speed_m_s(),
            efficiency: default_efficiency(),
            candidate_ratios: default_candidate_ratios(),
        }
    }
}

// ---------------------------------------------------------------------------
// ScenarioConfig
// ---------------------------------------------------------------------------

/// Complete sizing scenario loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub load: LoadConfig,
    #[serde(default)]
    pub motor: MotorConfig,
    #[serde(default)]
    pub drive: DriveConfig,
}

impl ScenarioConfig {
    /// Validate the scenario. Returns Err on the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("load.mass_kg", self.load.mass_kg)?;
        check_positive("load.pulley_diameter_cm", self.load.pulley_diameter_cm)?;
        check_non_negative("load.acceleration_m_s2", self.load.acceleration_m_s2)?;
        check_non_negative("load.friction", self.load.friction)?;
        check_positive("motor.no_load_rpm", self.motor.no_load_rpm)?;
        check_positive("motor.stall_torque_nm", self.motor.stall_torque_nm)?;
        check_positive("drive.target_speed_m_s", self.drive.target_speed_m_s)?;

        if !self.drive.efficiency.is_finite()
            || self.drive.efficiency <= 0.0
            || self.drive.efficiency > 1.0
        {
            return Err(ConfigError::InvalidValue {
                field: "drive.efficiency".into(),
                message: format!("must be in (0, 1], got {}", self.drive.efficiency),
            });
        }

        if self.drive.candidate_ratios.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "drive.candidate_ratios".into(),
                message: "must contain at least one ratio".into(),
            });
        }
        for &ratio in &self.drive.candidate_ratios {
            check_positive("drive.candidate_ratios", ratio)?;
        }

        Ok(())
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
