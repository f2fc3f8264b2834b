//! Integration test: size the reference winch scenario end to end.
//!
//! 2 kg load on a 2 cm drum, lifted at 0.8 m/s by a 6000 RPM / 0.17 Nm
//! hobby motor through an 85% efficient gear train, and checks that:
//! 1. Torque demand at the drum is 0.236 Nm
//! 2. The theoretical ratio lands at 9.24:1 and the catalog picks 10:1
//! 3. The projected mechanism holds 14.73 kg statically, clearing the
//!    2 kg load with a 7.4x margin
//!
//! Reference inputs:
//!   Mass: 2.0 kg, Drum diameter: 0.02 m, Target speed: 0.8 m/s
//!   Motor: 6000 RPM no-load / 0.17 Nm stall, Efficiency: 0.85
//!   Catalog: {5, 7, 10, 15, 20}

use std::f64::consts::PI;

use approx::assert_relative_eq;

use hoist_core::config::ScenarioConfig;
use hoist_sizing::prelude::*;

const DRUM_DIAMETER: f64 = 0.02;
const TARGET_SPEED: f64 = 0.8;
const EFFICIENCY: f64 = 0.85;

fn reference_load() -> LiftLoad {
    LiftLoad::new(2.0, DRUM_DIAMETER / 2.0)
}

fn reference_motor() -> Motor {
    Motor::new(0.17, 6000.0)
}

fn reference_outcome() -> SizingOutcome {
    size_mechanism(
        &reference_load(),
        &reference_motor(),
        TARGET_SPEED,
        EFFICIENCY,
        &RatioCatalog::standard(),
    )
    .unwrap()
}

#[test]
fn demand_side_torque() {
    // 0.1962 (gravity) + 0.02 (acceleration) + 0.01962 (friction).
    let outcome = reference_outcome();
    assert_relative_eq!(outcome.required_torque, 0.23582, epsilon = 1e-9);
    assert_relative_eq!(
        outcome.required_torque,
        reference_load().required_torque().unwrap(),
        epsilon = 1e-12
    );
}

#[test]
fn ratio_solve_and_catalog_pick() {
    let outcome = reference_outcome();
    // (6000 / (2400/π)) / 0.85 = 2.5π / 0.85 ≈ 9.24, rounded up to 10:1.
    assert_relative_eq!(outcome.optimal_ratio, 2.5 * PI / 0.85, epsilon = 1e-12);
    assert!((outcome.optimal_ratio - 9.24).abs() < 0.001);
    assert_relative_eq!(outcome.selected_ratio, 10.0, epsilon = 1e-12);
}

#[test]
fn projection_at_selected_ratio() {
    let outcome = reference_outcome();
    assert_relative_eq!(outcome.spec.output_rpm, 600.0, epsilon = 1e-12);
    assert_relative_eq!(outcome.spec.output_torque, 1.445, epsilon = 1e-12);
    assert_relative_eq!(outcome.spec.linear_speed, 0.2 * PI, epsilon = 1e-12);
    assert_relative_eq!(
        outcome.spec.max_mass,
        1.445 / (9.81 * DRUM_DIAMETER / 2.0),
        epsilon = 1e-12
    );
    assert!((outcome.spec.max_mass - 14.73).abs() < 0.01);
}

#[test]
fn capacity_check_passes_with_margin() {
    let outcome = reference_outcome();
    assert!(outcome.can_lift);
    assert!((outcome.capacity_margin - 7.36).abs() < 0.01);
}

#[test]
fn unrounded_ratio_round_trip_scales_speed_by_efficiency() {
    // The solver divides by efficiency once; projecting with the unrounded
    // ratio and the same efficiency therefore lands the linear speed at
    // efficiency × target, not at target itself.
    let optimal = optimal_ratio(&reference_motor(), DRUM_DIAMETER, TARGET_SPEED, EFFICIENCY)
        .unwrap();
    let train = GearTrain::new(optimal).with_efficiency(EFFICIENCY);
    let spec = project(&reference_motor(), &train, DRUM_DIAMETER).unwrap();
    assert_relative_eq!(spec.linear_speed, EFFICIENCY * TARGET_SPEED, epsilon = 1e-12);
}

#[test]
fn selected_ratio_undershoots_target_speed() {
    // 10:1 is a stronger reduction than the 9.24:1 optimum, so the built
    // mechanism runs slower than the target.
    let outcome = reference_outcome();
    assert!(outcome.spec.linear_speed < TARGET_SPEED);
}

#[test]
fn default_scenario_config_reproduces_reference() {
    // The TOML defaults describe the same scenario; mapping them through
    // the boundary (cm → m, diameter → radius) must give the same outcome.
    let config = ScenarioConfig::default();
    config.validate().unwrap();

    let load = LiftLoad::new(config.load.mass_kg, config.load.pulley_radius_m())
        .with_acceleration(config.load.acceleration_m_s2)
        .with_friction(config.load.friction);
    let motor = Motor::new(config.motor.stall_torque_nm, config.motor.no_load_rpm);
    let catalog = RatioCatalog::new(config.drive.candidate_ratios.clone()).unwrap();

    let outcome = size_mechanism(
        &load,
        &motor,
        config.drive.target_speed_m_s,
        config.drive.efficiency,
        &catalog,
    )
    .unwrap();

    assert_eq!(outcome, reference_outcome());
}

#[test]
fn undersized_mechanism_reports_failure() {
    // Same drivetrain asked to hold ten times the mass: demand rises
    // linearly but capacity stays fixed, so the verdict flips.
    let load = LiftLoad::new(20.0, DRUM_DIAMETER / 2.0);
    let outcome = size_mechanism(
        &load,
        &reference_motor(),
        TARGET_SPEED,
        EFFICIENCY,
        &RatioCatalog::standard(),
    )
    .unwrap();
    assert!(!outcome.can_lift);
    assert!(outcome.capacity_margin < 1.0);
    assert_relative_eq!(
        outcome.required_torque,
        10.0 * reference_outcome().required_torque,
        epsilon = 1e-9
    );
}
