//! Resource tracking and allocation guards for the search.
//!
//! The transposition table can grow to 2^N entries. To avoid hard OOM aborts on wide castles the
//! search uses:
//! - counter-based budgets ([`crate::scenario::ResourceLimits`])
//! - `try_reserve` wrappers to surface allocation failures as [`crate::scenario::SearchError`]

use std::collections::VecDeque;

use crate::scenario::{ResourceCounts, ResourceLimits, SearchError};

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    #[inline]
    pub fn bump_states(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "states",
            delta as u64,
            self.limits.max_states as u64,
            |c| &mut c.states,
        )
    }

    #[inline]
    pub fn bump_edges(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "edges",
            delta as u64,
            self.limits.max_edges as u64,
            |c| &mut c.edges,
        )
    }

    #[inline]
    pub fn bump_steps(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        self.bump(
            stage,
            "runtime_steps",
            delta,
            self.limits.max_runtime_steps,
            |c| &mut c.runtime_steps,
        )
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }

    pub fn try_reserve_queue<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        q: &mut VecDeque<T>,
        additional: usize,
    ) -> Result<(), SearchError> {
        q.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }

    pub fn try_reserve_map<K, V>(
        &self,
        stage: &'static str,
        structure: &'static str,
        map: &mut rustc_hash::FxHashMap<K, V>,
        additional: usize,
    ) -> Result<(), SearchError>
    where
        K: std::hash::Hash + Eq,
    {
        map.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }
}
