//! # Estimate Calculations
//!
//! This module contains the area and trim calculations. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> CalcResult<*Result>` - Pure calculation function
//!
//! The underlying geometry is also exposed as standalone pure functions
//! ([`estimate::wall_area`], [`estimate::linear_trim`],
//! [`estimate::ceiling_area`]) for callers that validate inputs themselves.
//!
//! ## Available Calculations
//!
//! - [`estimate`] - Paintable wall area, linear trim, and ceiling area

pub mod estimate;

// Re-export commonly used types
pub use estimate::{EstimateInput, EstimateResult};
