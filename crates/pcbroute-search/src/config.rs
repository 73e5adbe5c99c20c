use std::time::Duration;

use crate::batch::Execution;

/// Initial frontier capacity used by [`SearchConfig::default`].
pub const DEFAULT_FRONTIER_CAPACITY: usize = 15_000;

/// Tuning knobs for a [`Router`](crate::Router).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Number of frontier entries allocated up front. The frontier doubles
    /// its storage when this fills up.
    pub frontier_capacity: usize,
    /// Stop with [`ExhaustReason::ExpansionLimit`](crate::ExhaustReason)
    /// after this many expansions.
    pub max_expansions: Option<usize>,
    /// Stop with [`ExhaustReason::Deadline`](crate::ExhaustReason) once a
    /// search has run this long. Checked between expansions only.
    pub time_limit: Option<Duration>,
    /// How the broad-phase and distance batches are evaluated.
    pub execution: Execution,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            frontier_capacity: DEFAULT_FRONTIER_CAPACITY,
            max_expansions: None,
            time_limit: None,
            execution: Execution::default(),
        }
    }
}
