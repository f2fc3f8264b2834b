//! Common motor and gear-train presets based on hobby robotics hardware.

use crate::gearing::GearTrain;
use crate::motor::Motor;

/// Common drive motor configurations.
pub mod motors {
    use super::Motor;

    /// Bare competition-class hobby motor (REV HD Hex class).
    pub const fn hobby_gearmotor() -> Motor {
        Motor::new(0.17, 6000.0)
    }

    /// Small high-speed brushed can (775 class).
    pub const fn high_speed_brushed() -> Motor {
        Motor::new(0.71, 18700.0)
    }

    /// Full-size brushed DC motor (CIM class).
    pub const fn big_brushed() -> Motor {
        Motor::new(2.41, 5330.0)
    }

    /// Micro metal gearmotor core (N20 class).
    pub const fn micro_gearmotor() -> Motor {
        Motor::new(0.003, 13000.0)
    }
}

/// Common gear-train configurations.
pub mod gear_trains {
    use super::GearTrain;

    /// Stacked spur gearbox.  Cheap and serviceable.
    pub const fn spur(ratio: f64) -> GearTrain {
        GearTrain::new(ratio).with_efficiency(0.9)
    }

    /// Planetary gearbox.  Compact at high reductions.
    pub const fn planetary(ratio: f64) -> GearTrain {
        GearTrain::new(ratio).with_efficiency(0.85)
    }

    /// Worm drive.  Holds position unpowered; poor efficiency.
    pub const fn worm(ratio: f64) -> GearTrain {
        GearTrain::new(ratio).with_efficiency(0.5)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hobby_gearmotor_valid() {
        let m = motors::hobby_gearmotor();
        assert!(m.validate().is_ok());
        assert!((m.stall_torque - 0.17).abs() < f64::EPSILON);
        assert!((m.no_load_rpm - 6000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn high_speed_brushed_valid() {
        let m = motors::high_speed_brushed();
        assert!(m.validate().is_ok());
        assert!(m.no_load_rpm > motors::hobby_gearmotor().no_load_rpm);
    }

    #[test]
    fn big_brushed_valid() {
        let m = motors::big_brushed();
        assert!(m.validate().is_ok());
        assert!(m.stall_torque > 1.0);
    }

    #[test]
    fn micro_gearmotor_valid() {
        let m = motors::micro_gearmotor();
        assert!(m.validate().is_ok());
        assert!(m.stall_torque < 0.01);
    }

    #[test]
    fn spur_valid() {
        let t = gear_trains::spur(10.0);
        assert!(t.validate().is_ok());
        assert!((t.ratio - 10.0).abs() < f64::EPSILON);
        assert!((t.efficiency - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn planetary_valid() {
        let t = gear_trains::planetary(15.0);
        assert!(t.validate().is_ok());
        assert!((t.efficiency - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn worm_valid() {
        let t = gear_trains::worm(20.0);
        assert!(t.validate().is_ok());
        assert!((t.efficiency - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn worm_is_least_efficient() {
        assert!(gear_trains::worm(10.0).efficiency < gear_trains::planetary(10.0).efficiency);
        assert!(gear_trains::planetary(10.0).efficiency < gear_trains::spur(10.0).efficiency);
    }
}
