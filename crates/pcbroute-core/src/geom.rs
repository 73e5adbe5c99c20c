//! Geometry primitives: [`Point`] and [`IntBox`].
//!
//! Board coordinates are integers. X grows right, Y grows up (board
//! coordinates, not screen coordinates).

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::GeometryError;
use crate::weights::Weights;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point on the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four axis-aligned neighbours at unit distance (east, north, west,
    /// south).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x, self.y - 1),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// IntBox
// ---------------------------------------------------------------------------

/// A closed axis-aligned rectangle with integer corners.
///
/// `ll` is the lower-left corner and `ur` the upper-right corner, with
/// `ll.x <= ur.x` and `ll.y <= ur.y`. The invariant is checked once at
/// construction, so every `IntBox` in circulation is well formed. A box whose
/// corners coincide is a point and is a valid box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[i32; 4]", into = "[i32; 4]")
)]
pub struct IntBox {
    ll: Point,
    ur: Point,
}

impl IntBox {
    /// Create a box from its four coordinates.
    ///
    /// Fails with [`GeometryError::InvalidBox`] if `llx > urx` or
    /// `lly > ury`. Unlike a range constructor, the corners are never
    /// swapped: an inverted box is a caller bug.
    pub fn new(llx: i32, lly: i32, urx: i32, ury: i32) -> Result<Self, GeometryError> {
        if llx > urx || lly > ury {
            return Err(GeometryError::InvalidBox {
                llx,
                lly,
                urx,
                ury,
            });
        }
        Ok(Self {
            ll: Point::new(llx, lly),
            ur: Point::new(urx, ury),
        })
    }

    /// Create a box from its lower-left and upper-right corners.
    #[inline]
    pub fn from_corners(ll: Point, ur: Point) -> Result<Self, GeometryError> {
        Self::new(ll.x, ll.y, ur.x, ur.y)
    }

    /// The degenerate box covering the single point `p`.
    #[inline]
    pub const fn from_point(p: Point) -> Self {
        Self { ll: p, ur: p }
    }

    /// Lower-left corner.
    #[inline]
    pub const fn ll(self) -> Point {
        self.ll
    }

    /// Upper-right corner.
    #[inline]
    pub const fn ur(self) -> Point {
        self.ur
    }

    /// Extent along x. Widened to `i64`: a box spanning the whole `i32`
    /// range is valid.
    #[inline]
    pub fn width(self) -> i64 {
        i64::from(self.ur.x) - i64::from(self.ll.x)
    }

    /// Extent along y.
    #[inline]
    pub fn height(self) -> i64 {
        i64::from(self.ur.y) - i64::from(self.ll.y)
    }

    /// Whether the box is a single point.
    #[inline]
    pub fn is_point(self) -> bool {
        self.ll == self.ur
    }

    /// Center of the box, rounded towards negative infinity.
    #[inline]
    pub fn center(self) -> Point {
        // Lies between the corners, so it fits back into i32.
        let cx = i64::from(self.ll.x) + self.width().div_euclid(2);
        let cy = i64::from(self.ll.y) + self.height().div_euclid(2);
        Point::new(cx as i32, cy as i32)
    }

    /// Whether `p` lies inside the box or on its boundary.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.ll.x && p.x <= self.ur.x && p.y >= self.ll.y && p.y <= self.ur.y
    }

    /// Whether the interiors of the two boxes overlap.
    ///
    /// Uses strict inequalities on both axes, so boxes that only share an
    /// edge or a corner do **not** intersect. Symmetric in its arguments.
    #[inline]
    pub fn intersects(self, other: IntBox) -> bool {
        self.ll.x < other.ur.x
            && self.ur.x > other.ll.x
            && self.ll.y < other.ur.y
            && self.ur.y > other.ll.y
    }

    /// Whether the two closed boxes share at least one point (touching
    /// counts).
    #[inline]
    pub fn touches_or_overlaps(self, other: IntBox) -> bool {
        self.ll.x <= other.ur.x
            && self.ur.x >= other.ll.x
            && self.ll.y <= other.ur.y
            && self.ur.y >= other.ll.y
    }

    /// Gap between the projections of the two boxes onto the x axis, zero
    /// when the projections overlap or touch.
    #[inline]
    pub fn gap_x(self, other: IntBox) -> i64 {
        let left = i64::from(self.ll.x) - i64::from(other.ur.x);
        let right = i64::from(other.ll.x) - i64::from(self.ur.x);
        left.max(right).max(0)
    }

    /// Gap between the projections of the two boxes onto the y axis.
    #[inline]
    pub fn gap_y(self, other: IntBox) -> i64 {
        let below = i64::from(self.ll.y) - i64::from(other.ur.y);
        let above = i64::from(other.ll.y) - i64::from(self.ur.y);
        below.max(above).max(0)
    }

    /// Weighted rectilinear gap to `other`: `wx * gap_x + wy * gap_y`.
    ///
    /// This is a lower bound of the cost of any rectilinear path from a
    /// point of `self` to a point of `other` when moving one unit along x
    /// costs at least `wx` and along y at least `wy`.
    #[inline]
    pub fn weighted_distance(self, other: IntBox, weights: Weights) -> f64 {
        weights.x() * self.gap_x(other) as f64 + weights.y() * self.gap_y(other) as f64
    }

    /// Smallest box containing both boxes.
    #[inline]
    pub fn union(self, other: IntBox) -> Self {
        Self {
            ll: Point::new(self.ll.x.min(other.ll.x), self.ll.y.min(other.ll.y)),
            ur: Point::new(self.ur.x.max(other.ur.x), self.ur.y.max(other.ur.y)),
        }
    }

    /// Grow the box by `d` on every side (shrink if `d` is negative).
    ///
    /// Used to inflate a footprint by a clearance distance. Shrinking past a
    /// point fails with [`GeometryError::InvalidBox`]; growing past the
    /// coordinate range fails with [`GeometryError::CoordinateOverflow`].
    pub fn offset(self, d: i32) -> Result<Self, GeometryError> {
        let (Some(llx), Some(lly), Some(urx), Some(ury)) = (
            self.ll.x.checked_sub(d),
            self.ll.y.checked_sub(d),
            self.ur.x.checked_add(d),
            self.ur.y.checked_add(d),
        ) else {
            return Err(GeometryError::CoordinateOverflow);
        };
        Self::new(llx, lly, urx, ury)
    }

    /// Return the box translated by `p`.
    pub fn translate(self, p: Point) -> Result<Self, GeometryError> {
        let (Some(llx), Some(lly), Some(urx), Some(ury)) = (
            self.ll.x.checked_add(p.x),
            self.ll.y.checked_add(p.y),
            self.ur.x.checked_add(p.x),
            self.ur.y.checked_add(p.y),
        ) else {
            return Err(GeometryError::CoordinateOverflow);
        };
        Ok(Self {
            ll: Point::new(llx, lly),
            ur: Point::new(urx, ury),
        })
    }
}

impl fmt::Display for IntBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.ll, self.ur)
    }
}

impl TryFrom<[i32; 4]> for IntBox {
    type Error = GeometryError;

    fn try_from(c: [i32; 4]) -> Result<Self, Self::Error> {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<IntBox> for [i32; 4] {
    fn from(b: IntBox) -> Self {
        [b.ll.x, b.ll.y, b.ur.x, b.ur.y]
    }
}
