use std::hash::Hash;

use pcbroute_core::{IntBox, Shape};

use crate::router::Candidate;

/// Move generation: the board-specific half of a search.
pub trait MoveGenerator {
    /// Footprint of one search position. Equal shapes are the same search
    /// state, which is how revisits are recognised.
    type Shape: Shape + Clone + Eq + Hash;

    /// Append the successors of `from` into `buf` as `(shape, step_cost)`
    /// pairs. The caller clears `buf` before calling. Step costs must be
    /// finite and > 0.
    fn successors(&self, from: &Candidate<Self::Shape>, buf: &mut Vec<(Self::Shape, f64)>);
}

/// Precise geometry tests, run only after a cheap bounding-box test passed.
pub trait ExactIntersect: MoveGenerator {
    /// Whether `shape` really overlaps `obstacle`. Called only for pairs
    /// whose bounding boxes strictly overlap.
    ///
    /// The default treats every shape as its bounding box, so a broad-phase
    /// hit is taken as a collision.
    fn collides(&self, _shape: &Self::Shape, _obstacle: &Self::Shape) -> bool {
        true
    }

    /// Whether `shape` has arrived at `destination`.
    ///
    /// The default requires the interiors of the shape's bounding box and
    /// the destination to overlap.
    fn reaches(&self, shape: &Self::Shape, destination: IntBox) -> bool {
        shape.bounding_box().intersects(destination)
    }
}
