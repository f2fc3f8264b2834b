// hoist-core: Errors, scenario configuration, and shared physical constants
// for the hoist mechanism sizing tools.

pub mod config;
pub mod constants;
pub mod error;
