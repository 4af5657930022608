//! # Room Paint Estimate
//!
//! Computes the three quantities a painter needs for a rectangular room:
//!
//! - **Net wall area**: gross wall area minus window and door openings,
//!   floored at zero
//! - **Linear trim**: baseboard run (room perimeter) plus opening casings
//! - **Ceiling area**: floor footprint, when requested
//!
//! Window and door records are explicit parameters everywhere they are used.
//! A zero-count [`Opening`] carries zero dimensions, so casing length is
//! naturally zero without any conditional state.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::calculations::estimate::{calculate, EstimateInput};
//! use paint_core::room::{FinishOptions, Opening, RoomSpec};
//!
//! let input = EstimateInput {
//!     label: "Bedroom".to_string(),
//!     room: RoomSpec::new(12.0, 10.0, 8.0),
//!     windows: Opening::group(1, 3.0, 4.0),
//!     doors: Opening::group(1, 3.0, 7.0),
//!     options: FinishOptions::default(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.wall_area_sqft.value(), 319.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, EstimateError};
use crate::room::{FinishOptions, Opening, RoomSpec};
use crate::units::{LinFt, SqFt};

/// Net paintable wall area in square feet.
///
/// gross = 2 * (length + width) * height, minus all window and door
/// openings. Floored at zero: openings larger than the walls never
/// produce a negative area.
pub fn wall_area(room: &RoomSpec, windows: &Opening, doors: &Opening) -> SqFt {
    let gross = room.gross_wall_area();
    let net = gross.0 - windows.total_area().0 - doors.total_area().0;
    SqFt(net.max(0.0))
}

/// Linear trim footage: baseboard perimeter plus opening casings.
///
/// Windows and doors are unconditional parameters so casing length is
/// well-defined even when no openings were entered (zero count, zero
/// dimensions, zero length).
pub fn linear_trim(
    room: &RoomSpec,
    options: &FinishOptions,
    windows: &Opening,
    doors: &Opening,
) -> LinFt {
    let baseboard = if options.include_baseboard {
        room.perimeter().0
    } else {
        0.0
    };
    let frames = if options.include_frames {
        windows.total_frame_length().0 + doors.total_frame_length().0
    } else {
        0.0
    };
    LinFt(baseboard + frames)
}

/// Ceiling area in square feet, or zero when not requested.
pub fn ceiling_area(room: &RoomSpec, include_ceiling: bool) -> SqFt {
    if include_ceiling {
        room.floor_area()
    } else {
        SqFt(0.0)
    }
}

/// Input parameters for a room paint estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Master bedroom",
///   "room": { "length_ft": 12.0, "width_ft": 10.0, "height_ft": 8.0 },
///   "windows": { "width_ft": 3.0, "height_ft": 4.0, "count": 1 },
///   "doors": { "width_ft": 3.0, "height_ft": 7.0, "count": 1 },
///   "options": {
///     "include_baseboard": true,
///     "include_frames": true,
///     "include_ceiling": false
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateInput {
    /// User label for this estimate (e.g., "Master bedroom")
    pub label: String,

    /// Room dimensions
    pub room: RoomSpec,

    /// All windows in the room ([`Opening::none`] when there are none)
    #[serde(default)]
    pub windows: Opening,

    /// All doors in the room ([`Opening::none`] when there are none)
    #[serde(default)]
    pub doors: Opening,

    /// Which quantities to report
    #[serde(default)]
    pub options: FinishOptions,
}

impl EstimateInput {
    /// Validate input parameters.
    ///
    /// The pure geometry functions assume non-negative finite inputs;
    /// this is the caller-side gate that enforces it.
    pub fn validate(&self) -> CalcResult<()> {
        let dims = [
            ("room.length_ft", self.room.length_ft),
            ("room.width_ft", self.room.width_ft),
            ("room.height_ft", self.room.height_ft),
            ("windows.width_ft", self.windows.width_ft),
            ("windows.height_ft", self.windows.height_ft),
            ("doors.width_ft", self.doors.width_ft),
            ("doors.height_ft", self.doors.height_ft),
        ];
        for (field, value) in dims {
            if !value.is_finite() {
                return Err(EstimateError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be finite",
                ));
            }
            if value < 0.0 {
                return Err(EstimateError::invalid_input(
                    field,
                    value.to_string(),
                    "Value cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

/// Results from a room paint estimate.
///
/// All three quantities are always computed; the option toggles are already
/// folded in (a disabled quantity reports zero). Front ends decide which
/// lines to display.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wall_area_sqft": 319.0,
///   "trim_length_ft": 44.0,
///   "ceiling_area_sqft": 0.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Net paintable wall area (sq ft)
    pub wall_area_sqft: SqFt,

    /// Linear trim footage: baseboards plus casings (ft)
    pub trim_length_ft: LinFt,

    /// Ceiling area (sq ft), zero when not requested
    pub ceiling_area_sqft: SqFt,
}

impl EstimateResult {
    /// Wall area formatted to two decimal places.
    pub fn wall_area_display(&self) -> String {
        format!("{:.2}", self.wall_area_sqft.0)
    }

    /// Trim footage formatted to two decimal places.
    pub fn trim_display(&self) -> String {
        format!("{:.2}", self.trim_length_ft.0)
    }

    /// Ceiling area formatted to two decimal places.
    pub fn ceiling_display(&self) -> String {
        format!("{:.2}", self.ceiling_area_sqft.0)
    }
}

/// Run the full estimate.
///
/// # Arguments
///
/// * `input` - Room, openings, and finish options
///
/// # Returns
///
/// * `Ok(EstimateResult)` - Computed areas and trim footage
/// * `Err(EstimateError)` - If any dimension is negative or non-finite
pub fn calculate(input: &EstimateInput) -> CalcResult<EstimateResult> {
    input.validate()?;

    Ok(EstimateResult {
        wall_area_sqft: wall_area(&input.room, &input.windows, &input.doors),
        trim_length_ft: linear_trim(&input.room, &input.options, &input.windows, &input.doors),
        ceiling_area_sqft: ceiling_area(&input.room, input.options.include_ceiling),
    })
}
