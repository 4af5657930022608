//! # paint_core - Room Paint Estimating Engine
//!
//! `paint_core` is the computational heart of Roomcoat, turning rectangular
//! room dimensions into paintable wall area, linear trim footage, and ceiling
//! area. All inputs and outputs are JSON-serializable, making the API easy to
//! drive from a terminal front end, a web form, or an automation script.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Parameters**: Opening dimensions are always passed alongside
//!   the room, never pulled from shared state
//!
//! ## Quick Start
//!
//! ```rust
//! use paint_core::calculations::estimate::{calculate, EstimateInput};
//! use paint_core::room::{FinishOptions, Opening, RoomSpec};
//!
//! let input = EstimateInput {
//!     label: "Master bedroom".to_string(),
//!     room: RoomSpec::new(12.0, 10.0, 8.0),
//!     windows: Opening::none(),
//!     doors: Opening::none(),
//!     options: FinishOptions::default(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.wall_area_sqft.value(), 352.0);
//! ```
//!
//! ## Modules
//!
//! - [`room`] - Room, opening, and finish-option input types
//! - [`calculations`] - Area and trim calculations
//! - [`photo`] - Edge-detection preview over an uploaded room photo
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod photo;
pub mod room;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::estimate::{calculate, EstimateInput, EstimateResult};
pub use errors::{CalcResult, EstimateError};
pub use room::{FinishOptions, Opening, RoomSpec};
