// ABOUTME: Geometry module for the tana-deck application
// ABOUTME: Provides EMU/point units, validated shape frames and slide sizes

use crate::errors::{DeckError, Result};

/// English Metric Units per inch
pub const EMU_PER_INCH: i64 = 914_400;

// Bounds of ST_Coordinate / ST_PositiveCoordinate in DrawingML
const MAX_COORDINATE: i64 = 27_273_042_316_900;
const MIN_COORDINATE: i64 = -27_273_042_329_600;

/// A length in English Metric Units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Emu(pub i64);

impl Emu {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::ops::Sub for Emu {
    type Output = Emu;

    fn sub(self, rhs: Emu) -> Emu {
        Emu(self.0 - rhs.0)
    }
}

/// Convert inches to EMU, rounded to the nearest unit
pub fn inches(value: f64) -> Emu {
    Emu((value * EMU_PER_INCH as f64).round() as i64)
}

/// A size in typographic points
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Pt(pub f64);

impl Pt {
    /// Hundredths of a point, the unit of `sz` and `spcPts`
    pub fn centipoints(self) -> i64 {
        (self.0 * 100.0).round() as i64
    }
}

/// Position and size of a shape on a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: Emu,
    pub y: Emu,
    pub cx: Emu,
    pub cy: Emu,
}

impl Rect {
    /// Create a frame, rejecting values DrawingML cannot represent
    pub fn new(x: Emu, y: Emu, cx: Emu, cy: Emu) -> Result<Self> {
        for (label, offset) in [("x", x), ("y", y)] {
            if offset.0 < MIN_COORDINATE || offset.0 > MAX_COORDINATE {
                return Err(DeckError::InvalidGeometry(format!(
                    "offset {} = {} EMU is out of range",
                    label, offset.0
                )));
            }
        }
        for (label, extent) in [("width", cx), ("height", cy)] {
            if extent.0 < 0 || extent.0 > MAX_COORDINATE {
                return Err(DeckError::InvalidGeometry(format!(
                    "{} = {} EMU must be between 0 and {}",
                    label, extent.0, MAX_COORDINATE
                )));
            }
        }
        Ok(Self { x, y, cx, cy })
    }

    /// Shorthand for a frame given in inches
    pub fn from_inches(x: f64, y: f64, cx: f64, cy: f64) -> Result<Self> {
        Self::new(inches(x), inches(y), inches(cx), inches(cy))
    }
}

/// Page size of every slide in a deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSize {
    pub width: Emu,
    pub height: Emu,
}

impl SlideSize {
    /// 10in x 7.5in
    pub const STANDARD_4X3: SlideSize = SlideSize {
        width: Emu(9_144_000),
        height: Emu(6_858_000),
    };

    /// Value of the `type` attribute on `p:sldSz`
    pub fn presentation_type(&self) -> &'static str {
        if *self == Self::STANDARD_4X3 {
            "screen4x3"
        } else {
            "custom"
        }
    }
}

impl Default for SlideSize {
    fn default() -> Self {
        Self::STANDARD_4X3
    }
}
