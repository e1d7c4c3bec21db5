//! Solved plans: a move sequence plus everything needed to check and display it.
//!
//! A [`Plan`] is produced once by [`solve`] (search + reconstruction) and is:
//! - **replayable**: [`replay`] rebuilds the intermediate states from the moves alone, without the
//!   transposition table,
//! - **checkable**: [`verify_catches_every_walk`] tracks where the princess could be using room
//!   sets instead of the elimination bitmask, and
//! - **serializable**: [`PlanReport`] is the JSON form printed by `princess --json`.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::castle::Castle;
use crate::core::state::State;
use crate::rules::propagate::inspect;
use crate::scenario::{Scenario, SearchError};
use crate::search::bfs::{search, SearchStats};
use crate::search::reconstruct::reconstruct;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub castle: Castle,
    /// Room inspected on each night, first night first.
    pub moves: Vec<usize>,
    /// `states[0]` is the start; `states[k]` is the state after night `k`.
    pub states: Vec<State>,
}

impl Plan {
    #[inline]
    pub fn nights(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn final_state(&self) -> State {
        self.states.last().copied().unwrap_or(State::START)
    }
}

#[derive(Debug, Clone)]
pub struct Solved {
    pub plan: Plan,
    pub stats: SearchStats,
}

/// Search, reconstruct and replay. The replayed end state must equal the scenario goal.
pub fn solve(scn: &Scenario) -> Result<Solved, SearchError> {
    let res = search(scn)?;
    let moves = reconstruct(&res.table, scn.start, scn.goal)?;
    let states = replay_from(scn.castle, scn.start, &moves)?;

    let plan = Plan {
        castle: scn.castle,
        moves,
        states,
    };
    if plan.final_state() != scn.goal {
        return Err(SearchError::PlanDoesNotCatch {
            final_state: plan.final_state(),
        });
    }

    info!(
        scenario = scn.name,
        rooms = scn.castle.rooms(),
        nights = plan.nights(),
        table = res.table.len(),
        "solved"
    );

    Ok(Solved {
        plan,
        stats: res.stats,
    })
}

/// Replay `moves` from total uncertainty and return every intermediate state.
pub fn replay(castle: Castle, moves: &[usize]) -> Result<Vec<State>, SearchError> {
    replay_from(castle, State::START, moves)
}

fn replay_from(castle: Castle, start: State, moves: &[usize]) -> Result<Vec<State>, SearchError> {
    let mut states = Vec::with_capacity(moves.len() + 1);
    let mut cur = start;
    states.push(cur);
    for &room in moves {
        if !castle.has_room(room) {
            return Err(SearchError::InvalidRoom {
                room,
                rooms: castle.rooms(),
            });
        }
        cur = inspect(castle, cur, room);
        states.push(cur);
    }
    Ok(states)
}

/// Check `moves` against every possible princess walk.
///
/// Keeps the set of rooms she could occupy: all rooms before the first night, then each night
/// every room adjacent to a possible room, minus the inspected room. Succeeds iff the set is
/// empty after the last inspection.
pub fn verify_catches_every_walk(castle: Castle, moves: &[usize]) -> Result<(), SearchError> {
    let rooms = castle.rooms();
    let mut possible = vec![true; rooms];

    for &inspected in moves {
        if !castle.has_room(inspected) {
            return Err(SearchError::InvalidRoom { room: inspected, rooms });
        }
        let mut next = vec![false; rooms];
        for room in (0..rooms).filter(|&r| possible[r]) {
            for n in castle.neighbors(room) {
                next[n] = true;
            }
        }
        next[inspected] = false;
        possible = next;
    }

    if possible.iter().any(|&p| p) {
        let bits = possible
            .iter()
            .enumerate()
            .filter(|&(_, &p)| !p)
            .fold(0u64, |acc, (r, _)| acc | (1u64 << r));
        return Err(SearchError::PlanDoesNotCatch {
            final_state: State::from_bits(bits),
        });
    }
    Ok(())
}

/// JSON form of a solved plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReport {
    pub scenario: String,
    pub rooms: usize,
    pub nights: usize,
    pub moves: Vec<usize>,
    pub states: Vec<State>,
    pub stats: StatsReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    pub expanded: usize,
    pub discovered: usize,
    pub edges: usize,
}

impl PlanReport {
    pub fn new(scn: &Scenario, solved: &Solved) -> Self {
        Self {
            scenario: scn.name.to_string(),
            rooms: solved.plan.castle.rooms(),
            nights: solved.plan.nights(),
            moves: solved.plan.moves.clone(),
            states: solved.plan.states.clone(),
            stats: StatsReport {
                expanded: solved.stats.expanded,
                discovered: solved.stats.discovered,
                edges: solved.stats.edges,
            },
        }
    }
}
