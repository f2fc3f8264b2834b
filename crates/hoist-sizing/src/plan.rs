//! End-to-end mechanism sizing: demand, ratio selection, projection, and
//! the capacity verdict.

use serde::{Deserialize, Serialize};

use hoist_core::error::SizingError;

use crate::gearing::{GearTrain, RatioCatalog, optimal_ratio};
use crate::load::LiftLoad;
use crate::motor::Motor;
use crate::projection::{DerivedSpec, project};

// ---------------------------------------------------------------------------
// SizingOutcome
// ---------------------------------------------------------------------------

/// Complete result of sizing a hoist mechanism.
///
/// Demand and capacity are computed by different models: `required_torque`
/// includes acceleration and friction margins, while `spec.max_mass` is the
/// static holding capacity (gravity only).  The verdict compares the load
/// mass against the static capacity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizingOutcome {
    /// Torque demand at the drum (Nm): gravity + acceleration + friction.
    pub required_torque: f64,
    /// Unrounded theoretical gear ratio.
    pub optimal_ratio: f64,
    /// Catalog member closest to the optimal ratio.
    pub selected_ratio: f64,
    /// Drum-side performance at the selected ratio.
    pub spec: DerivedSpec,
    /// Whether the static holding capacity covers the load mass
    /// (`max_mass >= mass`, non-strict).
    pub can_lift: bool,
    /// Capacity over demand: `max_mass / mass`.  A finished mechanism
    /// should carry a 1.5-2x margin.
    pub capacity_margin: f64,
}

// ---------------------------------------------------------------------------
// size_mechanism
// ---------------------------------------------------------------------------

/// Size a hoist mechanism for `load`, driven by `motor` through a gear
/// train of `efficiency`, choosing the catalog ratio nearest the
/// theoretical optimum for `target_speed` (m/s).
///
/// Chains the demand model, ratio solver, catalog pick, and projection;
/// every stage validates its inputs eagerly, so the outcome never carries
/// NaN or infinity.
pub fn size_mechanism(
    load: &LiftLoad,
    motor: &Motor,
    target_speed: f64,
    efficiency: f64,
    catalog: &RatioCatalog,
) -> Result<SizingOutcome, SizingError> {
    let required_torque = load.required_torque()?;
    let drum_diameter = 2.0 * load.drum_radius;

    let optimal = optimal_ratio(motor, drum_diameter, target_speed, efficiency)?;
    let selected = catalog.nearest(optimal);

    let train = GearTrain::new(selected).with_efficiency(efficiency);
    let spec = project(motor, &train, drum_diameter)?;

    Ok(SizingOutcome {
        required_torque,
        optimal_ratio: optimal,
        selected_ratio: selected,
        spec,
        can_lift: spec.max_mass >= load.mass,
        capacity_margin: spec.max_mass / load.mass,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
