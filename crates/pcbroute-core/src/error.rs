use std::fmt;

/// Errors raised when constructing geometry that would break the search.
///
/// These are precondition violations: a malformed box or weight would
/// corrupt frontier ordering and distance estimates, so they are rejected at
/// construction instead of being carried into a search.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A box whose lower-left corner lies above or right of its upper-right
    /// corner.
    InvalidBox {
        llx: i32,
        lly: i32,
        urx: i32,
        ury: i32,
    },
    /// An axis weight that is negative, infinite or NaN.
    InvalidWeight { x: f64, y: f64 },
    /// A derived box whose corners fall outside the `i32` coordinate range.
    CoordinateOverflow,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBox { llx, lly, urx, ury } => write!(
                f,
                "invalid box: lower-left ({llx}, {lly}) is not below-left of upper-right ({urx}, {ury})"
            ),
            Self::InvalidWeight { x, y } => {
                write!(f, "invalid axis weights ({x}, {y}): must be finite and >= 0")
            }
            Self::CoordinateOverflow => write!(f, "box coordinates overflow the i32 range"),
        }
    }
}

impl std::error::Error for GeometryError {}
