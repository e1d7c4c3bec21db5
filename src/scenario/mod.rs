//! Scenario layer: glue between the room rules and the search.
//!
//! A [`Scenario`] bundles:
//! - the [`Castle`] being searched
//! - the start and goal states of the traversal
//! - explicit budgets via [`ResourceLimits`]
//! - whether the traversal stops as soon as the goal is dequeued
//!
//! Start and goal are parameters rather than fixed to "nothing known" and "everything known" so
//! that the error paths of the search (unreachable goal) stay reachable from tests.

use thiserror::Error;

use crate::core::castle::Castle;
use crate::core::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Search budgets used to bound memory/time consumption.
///
/// - `max_states`: entries admitted to the transposition table
/// - `max_edges`: generated (state, room) transitions
/// - `max_runtime_steps`: dequeued states
pub struct ResourceLimits {
    pub max_states: usize,
    pub max_edges: usize,
    pub max_runtime_steps: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_states: 1 << 22,
            max_edges: 1 << 28,
            max_runtime_steps: 1 << 24,
        }
    }
}

impl ResourceLimits {
    pub const UNLIMITED: ResourceLimits = ResourceLimits {
        max_states: usize::MAX,
        max_edges: usize::MAX,
        max_runtime_steps: u64::MAX,
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub states: u64,
    pub edges: u64,
    pub runtime_steps: u64,
}

/// Structured errors returned by search, reconstruction and replay.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The room count cannot be represented, or a state does not fit the castle.
    #[error("invalid castle with {rooms} room(s): {reason}")]
    InvalidCastle { rooms: usize, reason: String },

    /// The traversal drained its queue without ever discovering the goal.
    #[error("goal {goal} is unreachable from {start} ({explored} state(s) explored)")]
    GoalUnreachable {
        start: State,
        goal: State,
        explored: usize,
    },

    /// Reconstruction hit a state the transposition table does not know.
    #[error("transposition table has no entry for {state} while walking back from {goal}")]
    MissingEntry { state: State, goal: State },

    /// A move names a room outside the castle.
    #[error("room {room} is outside a castle with {rooms} room(s)")]
    InvalidRoom { room: usize, rooms: usize },

    /// Replaying a plan did not eliminate every room.
    #[error("plan ends in {final_state} without eliminating every room")]
    PlanDoesNotCatch { final_state: State },

    /// A configured resource limit was exceeded.
    #[error(
        "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
         counts(states={}, edges={}, runtime_steps={})",
        .counts.states,
        .counts.edges,
        .counts.runtime_steps
    )]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },

    /// A `try_reserve` allocation failed for a large structure.
    #[error(
        "allocation failed at {stage} for {structure}; \
         counts(states={}, edges={}, runtime_steps={})",
        .counts.states,
        .counts.edges,
        .counts.runtime_steps
    )]
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        counts: ResourceCounts,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A fully specified search configuration.
///
/// `Scenario::validate()` checks that start and goal fit inside the castle.
pub struct Scenario {
    pub name: &'static str,
    pub castle: Castle,
    pub start: State,
    pub goal: State,
    pub limits: ResourceLimits,
    /// Stop at the first dequeue of the goal instead of draining the queue.
    pub stop_at_goal: bool,
}

impl Scenario {
    /// The usual puzzle: from total uncertainty to every room eliminated.
    pub fn catch_princess(name: &'static str, rooms: usize) -> Result<Self, SearchError> {
        let castle = Castle::new(rooms)?;
        Ok(Self {
            name,
            castle,
            start: State::START,
            goal: castle.goal(),
            limits: ResourceLimits::default(),
            stop_at_goal: true,
        })
    }

    /// Validate scenario invariants. Intended to be called by CLIs/tests before running solvers.
    pub fn validate(&self) -> Result<(), SearchError> {
        for (what, s) in [("start", self.start), ("goal", self.goal)] {
            if !self.castle.contains(s) {
                return Err(SearchError::InvalidCastle {
                    rooms: self.castle.rooms(),
                    reason: format!("{what} state {s} has bits outside the castle"),
                });
            }
        }
        Ok(())
    }
}
