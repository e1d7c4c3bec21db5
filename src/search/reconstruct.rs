//! Path reconstruction from a filled transposition table.

use crate::core::state::State;
use crate::scenario::SearchError;
use crate::search::table::TranspositionTable;

/// Walk predecessors from `goal` back to `start` and return the inspected rooms in night order.
///
/// Fails with [`SearchError::MissingEntry`] if a state on the way is not in the table, or if the
/// walk runs longer than the table has entries (the chain never reaches `start`, which happens
/// when the table was built from a different start).
pub fn reconstruct(
    table: &TranspositionTable,
    start: State,
    goal: State,
) -> Result<Vec<usize>, SearchError> {
    let mut moves = Vec::new();
    let mut cur = goal;

    while cur != start {
        let entry = table
            .get(cur)
            .ok_or(SearchError::MissingEntry { state: cur, goal })?;
        if moves.len() >= table.len() {
            return Err(SearchError::MissingEntry { state: start, goal });
        }
        moves.push(entry.room);
        cur = entry.predecessor;
    }

    moves.reverse();
    Ok(moves)
}
