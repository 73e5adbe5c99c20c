use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::config::SearchConfig;
use crate::frontier::Frontier;

// ---------------------------------------------------------------------------
// Candidates
// ---------------------------------------------------------------------------

/// Handle of a [`Candidate`] in the router's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CandidateId(pub(crate) usize);

impl CandidateId {
    /// Position in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A generated search position.
///
/// Candidates are never modified once created: reaching the same shape more
/// cheaply creates a new candidate and leaves the old one stale.
#[derive(Clone, Debug)]
pub struct Candidate<S> {
    pub(crate) shape: S,
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) parent: Option<CandidateId>,
}

impl<S> Candidate<S> {
    /// Footprint of this position.
    #[inline]
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// Accumulated routing cost from the source.
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Admissible estimate of the remaining cost.
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Total estimated cost `g + h`.
    #[inline]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    /// The candidate this one was generated from; `None` for the source.
    #[inline]
    pub fn parent(&self) -> Option<CandidateId> {
        self.parent
    }
}

/// Frontier key: `f`, then a seeded random draw, then insertion order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) f: f64,
    pub(crate) tiebreak: u64,
    pub(crate) seq: u64,
    pub(crate) id: CandidateId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for FrontierEntry {}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Counters describing one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Candidates popped and expanded.
    pub expansions: usize,
    /// Successors produced by the move generator.
    pub generated: usize,
    /// Successors discarded because they collide with an obstacle.
    pub pruned: usize,
    /// Popped candidates skipped because a cheaper one superseded them.
    pub stale: usize,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
}

/// A found route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<S> {
    shapes: Vec<S>,
    cost: f64,
    destination: usize,
    stats: SearchStats,
}

impl<S> Path<S> {
    pub(crate) fn new(shapes: Vec<S>, cost: f64, destination: usize, stats: SearchStats) -> Self {
        Self {
            shapes,
            cost,
            destination,
            stats,
        }
    }

    /// Shapes from the source to the one that reached a destination, both
    /// included.
    #[inline]
    pub fn shapes(&self) -> &[S] {
        &self.shapes
    }

    /// Consume the path, returning its shapes.
    #[inline]
    pub fn into_shapes(self) -> Vec<S> {
        self.shapes
    }

    /// Total routing cost.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Index into the [`DestinationSet`](crate::DestinationSet) of the
    /// destination reached.
    #[inline]
    pub fn destination(&self) -> usize {
        self.destination
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Why a search ended without a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExhaustReason {
    /// Every reachable position was expanded.
    FrontierEmpty,
    /// The destination set was empty.
    NoDestinations,
    /// [`SearchConfig::max_expansions`] was reached.
    ExpansionLimit,
    /// [`SearchConfig::time_limit`] elapsed.
    Deadline,
}

/// A search that finished without reaching any destination.
///
/// This is an ordinary outcome, not a fault: callers such as rip-up logic
/// decide what to try next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exhausted {
    pub reason: ExhaustReason,
    pub stats: SearchStats,
}

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let why = match self.reason {
            ExhaustReason::FrontierEmpty => "no destination is reachable",
            ExhaustReason::NoDestinations => "no destinations were given",
            ExhaustReason::ExpansionLimit => "expansion limit reached",
            ExhaustReason::Deadline => "time limit reached",
        };
        write!(f, "search exhausted after {} expansions: {why}", self.stats.expansions)
    }
}

impl std::error::Error for Exhausted {}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Reusable best-first search engine over shapes of type `S`.
///
/// `Router` owns the frontier, the candidate arena and the bookkeeping maps,
/// so running many searches in a row reuses their allocations. A router is
/// driven by one thread at a time; run concurrent searches on separate
/// routers.
pub struct Router<S> {
    pub(crate) config: SearchConfig,
    pub(crate) frontier: Frontier<FrontierEntry>,
    pub(crate) arena: Vec<Candidate<S>>,
    // cheapest g seen per shape
    pub(crate) best_g: HashMap<S, f64>,
    // shapes known to collide during the current search
    pub(crate) blocked: HashSet<S>,
    pub(crate) seq: u64,
    pub(crate) succ_buf: Vec<(S, f64)>,
}

impl<S> Router<S> {
    /// Create a router with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            frontier: Frontier::new(config.frontier_capacity),
            config,
            arena: Vec::new(),
            best_g: HashMap::new(),
            blocked: HashSet::new(),
            seq: 0,
            succ_buf: Vec::new(),
        }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration. A new frontier capacity only takes effect
    /// if it exceeds the current allocation.
    pub fn set_config(&mut self, config: SearchConfig) {
        if config.frontier_capacity > self.frontier.capacity() {
            self.frontier = Frontier::new(config.frontier_capacity);
        }
        self.config = config;
    }

    /// Candidate behind `id`, valid until the next search starts.
    #[inline]
    pub fn candidate(&self, id: CandidateId) -> Option<&Candidate<S>> {
        self.arena.get(id.0)
    }

    pub(crate) fn reset(&mut self) {
        self.frontier.clear();
        self.arena.clear();
        self.best_g.clear();
        self.blocked.clear();
        self.succ_buf.clear();
        self.seq = 0;
    }
}

impl<S> Default for Router<S> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S> fmt::Debug for Router<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .field("candidates", &self.arena.len())
            .field("frontier", &self.frontier.len())
            .finish()
    }
}
