//! Breadth-first search over elimination states.
//!
//! Each state has one outgoing edge per room: propagate, then inspect that room. States are
//! recorded in the [`TranspositionTable`] the first time they are discovered, so the recorded
//! predecessor chain of every state is a fewest-nights path from the start.
//!
//! Rooms are tried in ascending order and the queue is FIFO, which makes the recorded chains (and
//! therefore the reconstructed plan) deterministic.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::rules::propagate::successors;
use crate::scenario::{ResourceCounts, Scenario, SearchError};
use crate::search::resources::ResourceTracker;
use crate::search::table::TranspositionTable;

/// Upper bound on the up-front table/queue reservation.
const MAX_INITIAL_RESERVE: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// States popped from the queue and expanded.
    pub expanded: usize,
    /// States recorded in the table, start included.
    pub discovered: usize,
    /// Transitions generated (expanded states times rooms).
    pub edges: usize,
    /// Whether the traversal stopped at the goal rather than draining the queue.
    pub stopped_at_goal: bool,
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub table: TranspositionTable,
    pub stats: SearchStats,
    pub counts: ResourceCounts,
}

/// Run the traversal described by `scn` and return the filled transposition table.
///
/// Fails with [`SearchError::GoalUnreachable`] if the queue drains without the goal ever being
/// discovered; never returns a table that lacks the goal.
pub fn search(scn: &Scenario) -> Result<SearchResult, SearchError> {
    scn.validate()?;

    let castle = scn.castle;
    let mut tracker = ResourceTracker::new(scn.limits);
    let mut table = TranspositionTable::new(scn.start);
    let mut queue: VecDeque<_> = VecDeque::new();

    let reserve = usize::try_from(castle.state_space())
        .unwrap_or(usize::MAX)
        .min(scn.limits.max_states)
        .min(MAX_INITIAL_RESERVE);
    tracker.try_reserve_map("bfs_init", "transposition_table", table.entries_mut(), reserve)?;
    tracker.try_reserve_queue("bfs_init", "frontier", &mut queue, reserve)?;

    tracker.bump_states("bfs_init", 1)?;
    queue.push_back(scn.start);

    debug!(
        scenario = scn.name,
        rooms = castle.rooms(),
        start = %scn.start,
        goal = %scn.goal,
        "bfs start"
    );

    let mut stats = SearchStats::default();

    while let Some(cur) = queue.pop_front() {
        if scn.stop_at_goal && cur == scn.goal {
            stats.stopped_at_goal = true;
            break;
        }

        tracker.bump_steps("bfs_expand", 1)?;
        tracker.bump_edges("bfs_expand", castle.rooms())?;
        stats.expanded += 1;
        stats.edges += castle.rooms();

        for (room, next) in successors(castle, cur) {
            if !table.discover(next, cur, room) {
                continue;
            }
            tracker.bump_states("bfs_expand", 1)?;
            trace!(state = %next, from = %cur, room, "discovered");
            if queue.len() == queue.capacity() {
                let grow = queue.len().max(1);
                tracker.try_reserve_queue("bfs_expand", "frontier", &mut queue, grow)?;
            }
            queue.push_back(next);
        }
    }

    stats.discovered = table.len();

    if !table.contains(scn.goal) {
        return Err(SearchError::GoalUnreachable {
            start: scn.start,
            goal: scn.goal,
            explored: table.len(),
        });
    }

    debug!(
        scenario = scn.name,
        expanded = stats.expanded,
        discovered = stats.discovered,
        edges = stats.edges,
        stopped_at_goal = stats.stopped_at_goal,
        "bfs done"
    );

    Ok(SearchResult {
        table,
        stats,
        counts: tracker.counts(),
    })
}
