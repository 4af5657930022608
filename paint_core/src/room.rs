//! # Room Input Types
//!
//! The transient data model for a single estimate: one rectangular room, one
//! opening record each for windows and doors, and the finish-option toggles.
//! These types live for the duration of a single calculation and are never
//! persisted.
//!
//! Opening records are always present even when the count is zero. The
//! zero-count record carries zero dimensions, so downstream casing math
//! naturally evaluates to zero without any conditional state.

use serde::{Deserialize, Serialize};

use crate::units::{Feet, LinFt, SqFt};

/// Dimensions of a rectangular room.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_ft": 12.0,
///   "width_ft": 10.0,
///   "height_ft": 8.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RoomSpec {
    /// Room length in feet
    pub length_ft: f64,

    /// Room width in feet
    pub width_ft: f64,

    /// Ceiling height in feet
    pub height_ft: f64,
}

impl RoomSpec {
    /// Create a room from length, width, and height in feet.
    pub fn new(length_ft: f64, width_ft: f64, height_ft: f64) -> Self {
        Self {
            length_ft,
            width_ft,
            height_ft,
        }
    }

    /// Floor perimeter: 2 * (length + width)
    pub fn perimeter(&self) -> Feet {
        Feet(2.0 * (self.length_ft + self.width_ft))
    }

    /// Floor (and ceiling) area: length * width
    pub fn floor_area(&self) -> SqFt {
        SqFt(self.length_ft * self.width_ft)
    }

    /// Gross wall area before openings: perimeter * height
    pub fn gross_wall_area(&self) -> SqFt {
        SqFt(self.perimeter().0 * self.height_ft)
    }
}

/// A group of identical rectangular openings (all windows, or all doors).
///
/// One `Opening` record describes every window in the room, a second every
/// door. A record with `count = 0` contributes nothing to area or casing
/// length regardless of its dimensions.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_ft": 3.0,
///   "height_ft": 4.0,
///   "count": 1
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Opening {
    /// Opening width in feet
    #[serde(default)]
    pub width_ft: f64,

    /// Opening height in feet
    #[serde(default)]
    pub height_ft: f64,

    /// Number of identical openings
    #[serde(default)]
    pub count: u32,
}

impl Opening {
    /// No openings: zero count and zero dimensions.
    pub fn none() -> Self {
        Self::default()
    }

    /// A group of `count` openings, each `width_ft` x `height_ft`.
    pub fn group(count: u32, width_ft: f64, height_ft: f64) -> Self {
        Self {
            width_ft,
            height_ft,
            count,
        }
    }

    /// Check whether any openings are present.
    pub fn is_present(&self) -> bool {
        self.count > 0
    }

    /// Combined opening area: count * width * height
    pub fn total_area(&self) -> SqFt {
        SqFt(self.count as f64 * self.width_ft * self.height_ft)
    }

    /// Combined casing length: count * (2 * width + 2 * height)
    pub fn total_frame_length(&self) -> LinFt {
        LinFt(self.count as f64 * (2.0 * self.width_ft + 2.0 * self.height_ft))
    }
}

/// Toggles controlling which quantities the estimate reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishOptions {
    /// Include baseboards (room perimeter) in linear footage
    pub include_baseboard: bool,

    /// Include window and door casings in linear footage
    pub include_frames: bool,

    /// Include ceiling square footage
    pub include_ceiling: bool,
}

impl Default for FinishOptions {
    /// Baseboards and casings on, ceiling off.
    fn default() -> Self {
        Self {
            include_baseboard: true,
            include_frames: true,
            include_ceiling: false,
        }
    }
}

impl FinishOptions {
    /// Whether any trim footage will be reported.
    pub fn wants_trim(&self) -> bool {
        self.include_baseboard || self.include_frames
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_perimeter() {
        let room = RoomSpec::new(12.0, 10.0, 8.0);
        assert_eq!(room.perimeter().0, 44.0);
    }

    #[test]
    fn test_room_floor_area() {
        let room = RoomSpec::new(12.0, 10.0, 8.0);
        assert_eq!(room.floor_area().0, 120.0);
    }

    #[test]
    fn test_gross_wall_area() {
        let room = RoomSpec::new(12.0, 10.0, 8.0);
        // 2 * (12 + 10) * 8 = 352
        assert_eq!(room.gross_wall_area().0, 352.0);
    }

    #[test]
    fn test_opening_none() {
        let none = Opening::none();
        assert!(!none.is_present());
        assert_eq!(none.total_area().0, 0.0);
        assert_eq!(none.total_frame_length().0, 0.0);
    }

    #[test]
    fn test_opening_totals() {
        let windows = Opening::group(2, 3.0, 4.0);
        assert!(windows.is_present());
        assert_eq!(windows.total_area().0, 24.0);
        // 2 * (2*3 + 2*4) = 28
        assert_eq!(windows.total_frame_length().0, 28.0);
    }

    #[test]
    fn test_zero_count_ignores_dimensions() {
        // Dimensions without a count contribute nothing.
        let phantom = Opening::group(0, 10.0, 10.0);
        assert_eq!(phantom.total_area().0, 0.0);
        assert_eq!(phantom.total_frame_length().0, 0.0);
    }

    #[test]
    fn test_finish_options_default() {
        let options = FinishOptions::default();
        assert!(options.include_baseboard);
        assert!(options.include_frames);
        assert!(!options.include_ceiling);
        assert!(options.wants_trim());
    }

    #[test]
    fn test_opening_serde_defaults() {
        // Missing fields deserialize to the zero opening.
        let parsed: Opening = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Opening::none());
    }

    #[test]
    fn test_serialization() {
        let room = RoomSpec::new(12.0, 10.0, 8.0);
        let json = serde_json::to_string(&room).unwrap();
        let roundtrip: RoomSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(room, roundtrip);
    }
}
