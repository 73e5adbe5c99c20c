//! Best-first geometric path search for board routing.
//!
//! This crate implements the single-path search primitive that higher-level
//! routing passes call over and over: find the cheapest collision-free chain
//! of shapes from a source to any of several destination regions.
//!
//! - A **frontier** min-heap ordered by estimated total cost ([`Frontier`])
//! - A batch **weighted-distance** heuristic ([`weighted_distances`])
//! - A batch **broad-phase** bounding-box filter ([`broad_phase::intersects`])
//! - The **search driver** ([`Router::search`], [`search`])
//!
//! The two batch evaluators are pure element-wise maps and may run on the
//! rayon pool (see [`Execution`]); the driver itself is single-threaded.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`MoveGenerator`] | successors of a candidate and their step costs |
//! | [`ExactIntersect`] : [`MoveGenerator`] | exact collision and arrival tests |

pub mod broad_phase;
mod batch;
mod config;
mod distance;
mod frontier;
mod router;
mod search;
mod seed;
mod sets;
mod traits;

pub use batch::{DEFAULT_MIN_PARALLEL_LEN, Execution};
pub use config::{DEFAULT_FRONTIER_CAPACITY, SearchConfig};
pub use distance::{chebyshev, manhattan, nearest, weighted_distances};
pub use frontier::{EmptyQueue, Frontier};
pub use router::{
    Candidate, CandidateId, ExhaustReason, Exhausted, Path, Router, SearchStats,
};
pub use search::search;
pub use seed::SeedState;
pub use sets::{DestinationSet, ObstacleSet};
pub use traits::{ExactIntersect, MoveGenerator};

pub use pcbroute_core::{GeometryError, IntBox, Point, Shape, Weights};
