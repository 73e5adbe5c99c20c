//! Broad-phase collision filter.
//!
//! A bounding-box overlap test is a necessary condition for two shapes to
//! overlap. `false` here is final; `true` only means the exact test has to
//! run.

use pcbroute_core::{IntBox, Shape};

use crate::batch::Execution;

/// Strict overlap of `query` with every box of `candidates`, in input order.
///
/// Boxes that only share an edge or a corner are reported as
/// non-intersecting.
pub fn intersects(query: IntBox, candidates: &[IntBox], exec: Execution) -> Vec<bool> {
    exec.map(candidates, |c| query.intersects(*c))
}

/// Like [`intersects`], taking the bounding boxes of arbitrary shapes.
pub fn intersects_shapes<Q, S>(query: &Q, others: &[S], exec: Execution) -> Vec<bool>
where
    Q: Shape + ?Sized,
    S: Shape + Sync,
{
    if others.is_empty() {
        return Vec::new();
    }
    let q = query.bounding_box();
    exec.map(others, |s| q.intersects(s.bounding_box()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcbroute_core::Point;

    fn bx(llx: i32, lly: i32, urx: i32, ury: i32) -> IntBox {
        IntBox::new(llx, lly, urx, ury).unwrap()
    }

    #[test]
    fn touching_is_not_intersecting() {
        let hits = intersects(
            bx(0, 0, 2, 2),
            &[bx(2, 0, 4, 2), bx(1, 0, 4, 2)],
            Execution::Sequential,
        );
        assert_eq!(hits, vec![false, true]);
    }

    #[test]
    fn result_is_symmetric() {
        let boxes = [
            bx(0, 0, 2, 2),
            bx(2, 0, 4, 2),
            bx(1, 1, 5, 5),
            bx(-3, -3, 0, 0),
            bx(1, 1, 1, 1),
        ];
        for a in boxes {
            let forward = intersects(a, &boxes, Execution::Sequential);
            for (i, b) in boxes.iter().enumerate() {
                let back = intersects(*b, &[a], Execution::Sequential);
                assert_eq!(forward[i], back[0], "{a} vs {b}");
            }
        }
    }

    #[test]
    fn empty_candidates() {
        assert!(intersects(bx(0, 0, 1, 1), &[], Execution::Parallel).is_empty());
        let none: [IntBox; 0] = [];
        assert!(intersects_shapes(&bx(0, 0, 1, 1), &none, Execution::Parallel).is_empty());
    }

    #[test]
    fn shapes_use_their_bounding_boxes() {
        struct Pad(Point);
        impl Shape for Pad {
            fn bounding_box(&self) -> IntBox {
                IntBox::from_point(self.0).offset(1).unwrap()
            }
        }
        let pads = [Pad(Point::new(0, 0)), Pad(Point::new(3, 0)), Pad(Point::new(10, 10))];
        let hits = intersects_shapes(&Pad(Point::new(1, 0)), &pads, Execution::Sequential);
        // The pad at 3 only touches the query at x = 2.
        assert_eq!(hits, vec![true, false, false]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let query = bx(0, 0, 50, 50);
        let candidates: Vec<IntBox> = (0..3000)
            .map(|i| {
                let x = (i * 7) % 101 - 25;
                let y = (i * 13) % 97 - 25;
                bx(x, y, x + 3, y + 2)
            })
            .collect();
        assert_eq!(
            intersects(query, &candidates, Execution::Sequential),
            intersects(query, &candidates, Execution::Parallel)
        );
    }
}
