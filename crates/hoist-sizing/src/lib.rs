//! Mechanism sizing for small motor-driven winches and elevators.
//!
//! Pure Rust library with no I/O or rendering dependencies.  Provides the
//! torque demand model, gear-ratio solver, catalog selection, and drum-side
//! performance projection.
//!
//! # Sizing Pipeline
//!
//! ```text
//! Load → Torque Demand    Motor → Optimal Ratio → Catalog Pick → Projection → Capacity Check
//!        (m·g·r terms)            (speed match)   (nearest)      (RPM/Nm/kg)  (max mass ≥ mass)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use hoist_sizing::prelude::*;
//!
//! // 2 kg on a 2 cm drum, lifted at 0.8 m/s by a 6000 RPM / 0.17 Nm motor.
//! let load = LiftLoad::new(2.0, 0.01);
//! let motor = Motor::new(0.17, 6000.0);
//! let catalog = RatioCatalog::standard();
//!
//! let outcome = size_mechanism(&load, &motor, 0.8, 0.85, &catalog)?;
//! assert!((outcome.selected_ratio - 10.0).abs() < 1e-12);
//! assert!(outcome.can_lift);
//! # Ok::<(), hoist_core::error::SizingError>(())
//! ```

mod check;
pub mod gearing;
pub mod load;
pub mod motor;
pub mod plan;
pub mod presets;
pub mod projection;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::gearing::{GearTrain, RatioCatalog, optimal_ratio};
    pub use crate::load::LiftLoad;
    pub use crate::motor::Motor;
    pub use crate::plan::{SizingOutcome, size_mechanism};
    pub use crate::presets;
    pub use crate::projection::{DerivedSpec, project};
}
