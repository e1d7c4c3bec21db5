//! Transposition table: visited state -> how it was first discovered.

use rustc_hash::FxHashMap;

use crate::core::state::State;

/// How a state was first reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub predecessor: State,
    /// Room inspected on the night that produced the state.
    pub room: usize,
}

/// Visited-state memo shared by the search (write) and reconstruction (read).
///
/// Entries are created once, on first discovery, and never updated afterwards. The start state is
/// its own predecessor with room 0 and terminates reconstruction.
#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: FxHashMap<State, Entry>,
}

impl TranspositionTable {
    pub fn new(start: State) -> Self {
        let mut entries = FxHashMap::default();
        entries.insert(
            start,
            Entry {
                predecessor: start,
                room: 0,
            },
        );
        Self { entries }
    }

    /// Record `state` unless it is already known. Returns `true` if it was new.
    #[inline]
    pub fn discover(&mut self, state: State, predecessor: State, room: usize) -> bool {
        use std::collections::hash_map::Entry as Slot;
        match self.entries.entry(state) {
            Slot::Occupied(_) => false,
            Slot::Vacant(v) => {
                v.insert(Entry { predecessor, room });
                true
            }
        }
    }

    #[inline]
    pub fn get(&self, state: State) -> Option<Entry> {
        self.entries.get(&state).copied()
    }

    #[inline]
    pub fn contains(&self, state: State) -> bool {
        self.entries.contains_key(&state)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (State, Entry)> + '_ {
        self.entries.iter().map(|(&s, &e)| (s, e))
    }

    pub(crate) fn entries_mut(&mut self) -> &mut FxHashMap<State, Entry> {
        &mut self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_its_own_predecessor() {
        let t = TranspositionTable::new(State::START);
        assert_eq!(
            t.get(State::START),
            Some(Entry {
                predecessor: State::START,
                room: 0
            })
        );
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn first_discovery_wins() {
        let mut t = TranspositionTable::new(State::START);
        let a = State::from_bits(0b01);
        let b = State::from_bits(0b10);
        let g = State::from_bits(0b11);

        assert!(t.discover(a, State::START, 0));
        assert!(t.discover(g, a, 1));
        assert!(!t.discover(g, b, 0));

        assert_eq!(
            t.get(g),
            Some(Entry {
                predecessor: a,
                room: 1
            })
        );
    }

    #[test]
    fn start_cannot_be_rediscovered() {
        let mut t = TranspositionTable::new(State::START);
        assert!(!t.discover(State::START, State::from_bits(1), 3));
        assert_eq!(t.get(State::START).map(|e| e.room), Some(0));
    }
}
