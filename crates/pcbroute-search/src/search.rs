//! The best-first search driver.
//!
//! One iteration pops the cheapest candidate, checks it against the
//! destinations, and otherwise expands it: successors are pruned against the
//! obstacles (bounding boxes first, exact test on hits), scored with the
//! weighted distance to the nearest destination, and pushed back.

use std::hash::Hash;
use std::time::Instant;

use pcbroute_core::{Shape, Weights};

use crate::broad_phase;
use crate::distance;
use crate::frontier::EmptyQueue;
use crate::router::{
    Candidate, CandidateId, ExhaustReason, Exhausted, FrontierEntry, Path, Router, SearchStats,
};
use crate::seed::SeedState;
use crate::sets::{DestinationSet, ObstacleSet};
use crate::traits::ExactIntersect;

impl<S> Router<S>
where
    S: Shape + Clone + Eq + Hash,
{
    /// Find the cheapest collision-free path from `source` to any box of
    /// `destinations`.
    ///
    /// `weights` must not exceed the true per-unit movement costs of the
    /// board's move generator, otherwise the result may not be the cheapest
    /// path. Ties between equally promising candidates are broken with
    /// `seed`, so a seeded job is fully reproducible.
    pub fn search<B>(
        &mut self,
        board: &B,
        source: S,
        destinations: &DestinationSet,
        obstacles: &ObstacleSet<S>,
        weights: Weights,
        seed: &mut SeedState,
    ) -> Result<Path<S>, Exhausted>
    where
        B: ExactIntersect<Shape = S>,
    {
        self.reset();
        let mut stats = SearchStats::default();

        if destinations.is_empty() {
            log::warn!("search from {} has no destinations", source.bounding_box());
            return Err(Exhausted {
                reason: ExhaustReason::NoDestinations,
                stats,
            });
        }

        log::debug!(
            "search from {} to {} destination(s) past {} obstacle(s), seed {:#018x}",
            source.bounding_box(),
            destinations.len(),
            obstacles.len(),
            seed.seed()
        );

        let started = Instant::now();
        let h = self.estimate(&source, destinations, weights);
        self.best_g.insert(source.clone(), 0.0);
        self.push(
            Candidate {
                shape: source,
                g: 0.0,
                h,
                parent: None,
            },
            seed,
        );
        stats.peak_frontier = 1;

        let mut succ = std::mem::take(&mut self.succ_buf);
        let outcome = loop {
            if self
                .config
                .time_limit
                .is_some_and(|limit| started.elapsed() >= limit)
            {
                break Err(ExhaustReason::Deadline);
            }

            let entry = match self.frontier.extract_min() {
                Ok(entry) => entry,
                Err(EmptyQueue) => break Err(ExhaustReason::FrontierEmpty),
            };
            let id = entry.id;
            let current = &self.arena[id.0];
            let g = current.g;

            if self.best_g.get(&current.shape).is_some_and(|&best| g > best) {
                stats.stale += 1;
                continue;
            }

            if let Some(dest) = destinations
                .boxes()
                .iter()
                .position(|d| board.reaches(&current.shape, *d))
            {
                break Ok((id, dest));
            }

            // Arrival is not an expansion, so the budget is spent only here.
            if self
                .config
                .max_expansions
                .is_some_and(|max| stats.expansions >= max)
            {
                break Err(ExhaustReason::ExpansionLimit);
            }
            stats.expansions += 1;
            log::trace!(
                "expand {} g={g} h={}",
                current.shape.bounding_box(),
                current.h
            );

            succ.clear();
            board.successors(current, &mut succ);

            for (shape, step) in succ.drain(..) {
                assert!(
                    step.is_finite() && step > 0.0,
                    "move cost must be finite and positive, got {step}"
                );
                stats.generated += 1;
                let g_next = g + step;

                if self.best_g.get(&shape).is_some_and(|&best| g_next >= best) {
                    continue;
                }
                if self.collides(board, &shape, obstacles) {
                    stats.pruned += 1;
                    continue;
                }

                let h = self.estimate(&shape, destinations, weights);
                self.best_g.insert(shape.clone(), g_next);
                self.push(
                    Candidate {
                        shape,
                        g: g_next,
                        h,
                        parent: Some(id),
                    },
                    seed,
                );
            }
            stats.peak_frontier = stats.peak_frontier.max(self.frontier.len());
        };
        self.succ_buf = succ;

        match outcome {
            Ok((id, destination)) => {
                let path = self.reconstruct(id, destination, stats);
                log::debug!(
                    "reached destination {destination} at cost {} after {} expansions",
                    path.cost(),
                    stats.expansions
                );
                Ok(path)
            }
            Err(reason) => {
                log::debug!(
                    "search exhausted ({reason:?}) after {} expansions",
                    stats.expansions
                );
                Err(Exhausted { reason, stats })
            }
        }
    }

    /// Broad phase against every obstacle, exact test on the hits. Results
    /// are cached for the rest of the search.
    fn collides<B>(&mut self, board: &B, shape: &S, obstacles: &ObstacleSet<S>) -> bool
    where
        B: ExactIntersect<Shape = S>,
    {
        if self.blocked.contains(shape) {
            return true;
        }
        let hits = broad_phase::intersects(
            shape.bounding_box(),
            obstacles.boxes(),
            self.config.execution,
        );
        let collides = hits
            .iter()
            .zip(obstacles.shapes())
            .any(|(&hit, obstacle)| hit && board.collides(shape, obstacle));
        if collides {
            self.blocked.insert(shape.clone());
        }
        collides
    }

    fn estimate(&self, shape: &S, destinations: &DestinationSet, weights: Weights) -> f64 {
        distance::nearest(
            shape.bounding_box(),
            destinations.boxes(),
            weights,
            self.config.execution,
        )
        .map_or(f64::INFINITY, |(_, d)| d)
    }

    fn push(&mut self, candidate: Candidate<S>, seed: &mut SeedState) {
        let id = CandidateId(self.arena.len());
        let entry = FrontierEntry {
            f: candidate.f(),
            tiebreak: seed.next_tiebreak(),
            seq: self.seq,
            id,
        };
        self.seq += 1;
        self.arena.push(candidate);
        self.frontier.insert(entry);
    }

    fn reconstruct(&self, goal: CandidateId, destination: usize, stats: SearchStats) -> Path<S> {
        let cost = self.arena[goal.0].g;
        let mut shapes = Vec::new();
        let mut cur = Some(goal);
        while let Some(id) = cur {
            let c = &self.arena[id.0];
            shapes.push(c.shape.clone());
            cur = c.parent;
        }
        shapes.reverse();
        Path::new(shapes, cost, destination, stats)
    }
}

/// Run one search with a freshly created [`Router`] using the default
/// configuration.
///
/// Every call allocates a new frontier of
/// [`DEFAULT_FRONTIER_CAPACITY`](crate::DEFAULT_FRONTIER_CAPACITY) entries and
/// fresh bookkeeping maps. Callers running many searches should keep one
/// [`Router`] and call [`Router::search`] on it instead.
pub fn search<B>(
    board: &B,
    source: B::Shape,
    destinations: &DestinationSet,
    obstacles: &ObstacleSet<B::Shape>,
    weights: Weights,
    seed: &mut SeedState,
) -> Result<Path<B::Shape>, Exhausted>
where
    B: ExactIntersect,
{
    Router::default().search(board, source, destinations, obstacles, weights, seed)
}
