//! Distance functions and the batch weighted-distance evaluator.

use pcbroute_core::{IntBox, Point, Weights};

use crate::batch::Execution;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L-inf) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Weighted rectilinear gap from `source` to every box of `destinations`,
/// in input order.
///
/// Each result is `wx * gap_x + wy * gap_y` where a gap is zero whenever the
/// two boxes' projections overlap on that axis. The value never exceeds the
/// cost of a path whose unit moves cost at least `wx` along x and `wy` along
/// y, so it is an admissible search heuristic under those weights.
pub fn weighted_distances(
    source: IntBox,
    destinations: &[IntBox],
    weights: Weights,
    exec: Execution,
) -> Vec<f64> {
    exec.map(destinations, |d| source.weighted_distance(*d, weights))
}

/// The smallest weighted distance from `source` to any destination, with the
/// index of the first destination attaining it.
///
/// Returns `None` when `destinations` is empty.
pub fn nearest(
    source: IntBox,
    destinations: &[IntBox],
    weights: Weights,
    exec: Execution,
) -> Option<(usize, f64)> {
    weighted_distances(source, destinations, weights, exec)
        .into_iter()
        .enumerate()
        .fold(None, |best, (i, d)| match best {
            Some((_, bd)) if bd <= d => best,
            _ => Some((i, d)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn bx(llx: i32, lly: i32, urx: i32, ury: i32) -> IntBox {
        IntBox::new(llx, lly, urx, ury).unwrap()
    }

    fn random_box(rng: &mut StdRng) -> IntBox {
        let x = rng.random_range(-50..50);
        let y = rng.random_range(-50..50);
        let w = rng.random_range(0..10);
        let h = rng.random_range(0..10);
        bx(x, y, x + w, y + h)
    }

    #[test]
    fn separated_boxes_unit_weights() {
        let d = weighted_distances(
            bx(0, 0, 1, 1),
            &[bx(5, 0, 6, 1)],
            Weights::UNIT,
            Execution::Sequential,
        );
        assert_eq!(d, vec![4.0]);
    }

    #[test]
    fn identical_boxes_are_at_zero() {
        let d = weighted_distances(
            bx(0, 0, 1, 1),
            &[bx(0, 0, 1, 1)],
            Weights::UNIT,
            Execution::Sequential,
        );
        assert_eq!(d, vec![0.0]);
    }

    #[test]
    fn empty_destinations_give_empty_result() {
        let d = weighted_distances(bx(0, 0, 1, 1), &[], Weights::UNIT, Execution::Parallel);
        assert!(d.is_empty());
        assert_eq!(
            nearest(bx(0, 0, 1, 1), &[], Weights::UNIT, Execution::Sequential),
            None
        );
    }

    #[test]
    fn point_source_uses_same_formula() {
        let p = IntBox::from_point(Point::new(2, 2));
        let w = Weights::new(1.5, 2.0).unwrap();
        let d = weighted_distances(p, &[bx(5, 5, 6, 6), bx(0, 0, 3, 3)], w, Execution::Sequential);
        assert_eq!(d, vec![1.5 * 3.0 + 2.0 * 3.0, 0.0]);
    }

    #[test]
    fn results_follow_input_order() {
        let dests = [bx(10, 0, 11, 1), bx(2, 0, 3, 1), bx(0, 7, 1, 8)];
        let d = weighted_distances(bx(0, 0, 1, 1), &dests, Weights::UNIT, Execution::Sequential);
        assert_eq!(d, vec![9.0, 1.0, 6.0]);
    }

    #[test]
    fn nearest_prefers_first_of_equal_minima() {
        let dests = [bx(10, 0, 11, 1), bx(3, 0, 4, 1), bx(0, 3, 1, 4)];
        let n = nearest(bx(0, 0, 1, 1), &dests, Weights::UNIT, Execution::Sequential);
        assert_eq!(n, Some((1, 2.0)));
    }

    #[test]
    fn sequential_and_parallel_agree_bitwise() {
        let mut rng = StdRng::seed_from_u64(99);
        let source = random_box(&mut rng);
        let dests: Vec<IntBox> = (0..4096).map(|_| random_box(&mut rng)).collect();
        let w = Weights::new(0.7, 1.3).unwrap();
        let seq = weighted_distances(source, &dests, w, Execution::Sequential);
        let par = weighted_distances(source, &dests, w, Execution::Parallel);
        let seq_bits: Vec<u64> = seq.iter().map(|v| v.to_bits()).collect();
        let par_bits: Vec<u64> = par.iter().map(|v| v.to_bits()).collect();
        assert_eq!(seq_bits, par_bits);
    }

    #[test]
    fn weighted_distance_is_admissible() {
        // The cheapest rectilinear route between any two points costs
        // wx * |dx| + wy * |dy|. The box distance must never exceed it for
        // any pair of points drawn from the two boxes.
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..300 {
            let a = random_box(&mut rng);
            let b = random_box(&mut rng);
            let w = Weights::new(rng.random_range(0.0..4.0), rng.random_range(0.0..4.0)).unwrap();
            let bound = a.weighted_distance(b, w);
            for _ in 0..10 {
                let pa = Point::new(
                    rng.random_range(a.ll().x..=a.ur().x),
                    rng.random_range(a.ll().y..=a.ur().y),
                );
                let pb = Point::new(
                    rng.random_range(b.ll().x..=b.ur().x),
                    rng.random_range(b.ll().y..=b.ur().y),
                );
                let true_cost =
                    w.x() * f64::from((pa.x - pb.x).abs()) + w.y() * f64::from((pa.y - pb.y).abs());
                assert!(bound <= true_cost + 1e-9, "{a} -> {b}: {bound} > {true_cost}");
            }
        }
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, -4)), 7);
        assert_eq!(manhattan(Point::new(2, 2), Point::new(2, 2)), 0);
    }

    #[test]
    fn chebyshev_distance() {
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(3, -4)), 4);
        assert_eq!(chebyshev(Point::new(-1, 5), Point::new(2, 5)), 3);
    }
}
