//! Destination and obstacle collections handed to a search.
//!
//! A search borrows both sets immutably, so neither can change while it
//! runs. Between searches the caller is free to edit them, e.g. to add the
//! footprint of a freshly committed trace to the obstacles.

use pcbroute_core::{IntBox, Shape};

// ---------------------------------------------------------------------------
// DestinationSet
// ---------------------------------------------------------------------------

/// Ordered set of acceptable end regions for one path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestinationSet {
    boxes: Vec<IntBox>,
}

impl DestinationSet {
    /// Create a destination set from boxes.
    pub fn new(boxes: Vec<IntBox>) -> Self {
        Self { boxes }
    }

    /// Create a destination set from the bounding boxes of `shapes`.
    pub fn from_shapes<S: Shape>(shapes: impl IntoIterator<Item = S>) -> Self {
        shapes.into_iter().map(|s| s.bounding_box()).collect()
    }

    /// Append a destination.
    pub fn push(&mut self, b: IntBox) {
        self.boxes.push(b);
    }

    /// The destination boxes in insertion order.
    #[inline]
    pub fn boxes(&self) -> &[IntBox] {
        &self.boxes
    }

    /// Destination at `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<IntBox> {
        self.boxes.get(idx).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl FromIterator<IntBox> for DestinationSet {
    fn from_iter<I: IntoIterator<Item = IntBox>>(iter: I) -> Self {
        Self {
            boxes: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// ObstacleSet
// ---------------------------------------------------------------------------

/// Ordered set of shapes a path must not overlap.
///
/// The bounding box of every shape is computed once on insertion and kept in
/// a parallel array, which is what the broad-phase filter consumes.
#[derive(Clone, Debug)]
pub struct ObstacleSet<S> {
    shapes: Vec<S>,
    boxes: Vec<IntBox>,
}

impl<S> Default for ObstacleSet<S> {
    fn default() -> Self {
        Self {
            shapes: Vec::new(),
            boxes: Vec::new(),
        }
    }
}

impl<S: Shape> ObstacleSet<S> {
    /// Create an empty obstacle set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an obstacle.
    pub fn push(&mut self, shape: S) {
        self.boxes.push(shape.bounding_box());
        self.shapes.push(shape);
    }

    /// Keep only the obstacles for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&S) -> bool) {
        let mut kept = 0;
        for i in 0..self.shapes.len() {
            if keep(&self.shapes[i]) {
                self.shapes.swap(kept, i);
                self.boxes.swap(kept, i);
                kept += 1;
            }
        }
        self.shapes.truncate(kept);
        self.boxes.truncate(kept);
    }

    /// Remove every obstacle.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.boxes.clear();
    }
}

impl<S> ObstacleSet<S> {
    /// Obstacle shapes in insertion order.
    #[inline]
    pub fn shapes(&self) -> &[S] {
        &self.shapes
    }

    /// Bounding boxes, index-aligned with [`shapes`](Self::shapes).
    #[inline]
    pub fn boxes(&self) -> &[IntBox] {
        &self.boxes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<S: Shape> Extend<S> for ObstacleSet<S> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for s in iter {
            self.push(s);
        }
    }
}

impl<S: Shape> FromIterator<S> for ObstacleSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn bx(llx: i32, lly: i32, urx: i32, ury: i32) -> IntBox {
        IntBox::new(llx, lly, urx, ury).unwrap()
    }

    #[test]
    fn destinations_keep_order() {
        let d: DestinationSet = [bx(5, 0, 6, 1), bx(0, 0, 1, 1)].into_iter().collect();
        assert_eq!(d.len(), 2);
        assert_eq!(d.get(0), Some(bx(5, 0, 6, 1)));
        assert_eq!(d.get(2), None);
    }

    #[test]
    fn destinations_from_shapes() {
        let d = DestinationSet::from_shapes([Arc::new(bx(1, 1, 2, 2))]);
        assert_eq!(d.boxes(), &[bx(1, 1, 2, 2)]);
    }

    #[test]
    fn obstacle_boxes_track_shapes() {
        let mut obs: ObstacleSet<IntBox> = [bx(0, 0, 1, 1), bx(4, 4, 6, 6), bx(9, 0, 10, 2)]
            .into_iter()
            .collect();
        assert_eq!(obs.boxes(), obs.shapes());

        obs.retain(|b| b.width() == 1);
        assert_eq!(obs.shapes(), &[bx(0, 0, 1, 1), bx(9, 0, 10, 2)]);
        assert_eq!(obs.boxes(), obs.shapes());

        obs.push(bx(2, 2, 3, 3));
        assert_eq!(obs.len(), 3);
        assert_eq!(obs.boxes()[2], bx(2, 2, 3, 3));

        obs.clear();
        assert!(obs.is_empty());
        assert!(obs.boxes().is_empty());
    }

    #[test]
    fn snapshots_are_independent() {
        let mut live: ObstacleSet<IntBox> = ObstacleSet::new();
        live.push(bx(0, 0, 1, 1));
        let snapshot = live.clone();
        live.push(bx(5, 5, 6, 6));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(live.len(), 2);
    }
}
