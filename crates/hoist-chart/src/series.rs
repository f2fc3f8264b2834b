//! Pure series computation for the gear-ratio comparison chart.

use hoist_core::error::SizingError;
use hoist_sizing::gearing::{GearTrain, RatioCatalog};
use hoist_sizing::load::LiftLoad;
use hoist_sizing::motor::Motor;
use hoist_sizing::projection::project;

// ---------------------------------------------------------------------------
// ComparisonSeries
// ---------------------------------------------------------------------------

/// Per-ratio performance series plus the demand reference line.
///
/// One entry per catalog ratio, index-aligned across the vectors.  Carries
/// every number the renderer needs, so rendering never recomputes physics.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonSeries {
    /// Candidate gear ratios, ascending.
    pub ratios: Vec<f64>,
    /// Linear cable speed at each ratio (m/s).
    pub linear_speeds: Vec<f64>,
    /// Drum torque at each ratio (Nm).
    pub output_torques: Vec<f64>,
    /// Static holding capacity at each ratio (kg).
    pub max_masses: Vec<f64>,
    /// Demand-side torque for the load (Nm), drawn as a reference line.
    pub required_torque: f64,
    /// Load mass the reference line describes (kg), for labeling.
    pub load_mass: f64,
}

impl ComparisonSeries {
    /// Project `motor` through every catalog ratio at `efficiency` and
    /// collect the per-ratio performance, together with the torque demand
    /// of `load`.
    pub fn compute(
        load: &LiftLoad,
        motor: &Motor,
        catalog: &RatioCatalog,
        efficiency: f64,
    ) -> Result<Self, SizingError> {
        let required_torque = load.required_torque()?;
        let drum_diameter = 2.0 * load.drum_radius;

        let count = catalog.ratios().len();
        let mut ratios = Vec::with_capacity(count);
        let mut linear_speeds = Vec::with_capacity(count);
        let mut output_torques = Vec::with_capacity(count);
        let mut max_masses = Vec::with_capacity(count);

        for &ratio in catalog.ratios() {
            let train = GearTrain::new(ratio).with_efficiency(efficiency);
            let spec = project(motor, &train, drum_diameter)?;
            ratios.push(ratio);
            linear_speeds.push(spec.linear_speed);
            output_torques.push(spec.output_torque);
            max_masses.push(spec.max_mass);
        }

        Ok(Self {
            ratios,
            linear_speeds,
            output_torques,
            max_masses,
            required_torque,
            load_mass: load.mass,
        })
    }

    /// Number of catalog points.
    pub const fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Whether the series has no points.  Never true for a series built by
    /// [`ComparisonSeries::compute`]; catalogs are non-empty by construction.
    pub const fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
