use crate::error::GeometryError;

/// Per-axis cost of one unit of movement.
///
/// Direction-dependent weights model a preferred trace direction on a layer:
/// a layer routed mostly horizontally makes vertical movement dearer. Both
/// factors are finite and non-negative.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(f64, f64)", into = "(f64, f64)")
)]
pub struct Weights {
    x: f64,
    y: f64,
}

impl Weights {
    /// Unit cost on both axes.
    pub const UNIT: Self = Self { x: 1.0, y: 1.0 };

    /// Create weights, rejecting negative or non-finite factors.
    pub fn new(x: f64, y: f64) -> Result<Self, GeometryError> {
        if !(x.is_finite() && y.is_finite() && x >= 0.0 && y >= 0.0) {
            return Err(GeometryError::InvalidWeight { x, y });
        }
        Ok(Self { x, y })
    }

    /// Cost per unit of movement along x.
    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    /// Cost per unit of movement along y.
    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::UNIT
    }
}

impl TryFrom<(f64, f64)> for Weights {
    type Error = GeometryError;

    fn try_from((x, y): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl From<Weights> for (f64, f64) {
    fn from(w: Weights) -> Self {
        (w.x, w.y)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn weights_serialize_as_pair() {
        let w = Weights::new(2.0, 0.5).unwrap();
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, "[2.0,0.5]");
        let back: Weights = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }

    #[test]
    fn negative_weight_fails_to_deserialize() {
        let res: Result<Weights, _> = serde_json::from_str("[-1.0,1.0]");
        assert!(res.is_err());
    }
}
