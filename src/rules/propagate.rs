//! Uncertainty propagation.
//!
//! Between two nights the princess must step to an adjacent room. A room can only hold her
//! tomorrow if one of its neighbors could hold her today, so uncertainty spreads one room in each
//! direction and leaves the room it came from (unless a neighbor spreads back into it).
//!
//! Room `j` is eliminated after propagation iff every in-range neighbor of `j` was eliminated
//! before it. A room with no neighbors is therefore always eliminated.

use crate::core::castle::Castle;
use crate::core::state::State;

/// Rooms the princess could occupy after one forced step, before tonight's inspection.
///
/// Pure function of `state`; bits outside the castle are ignored.
#[inline]
pub fn propagate(castle: Castle, state: State) -> State {
    let full = castle.full_mask();
    let uncertain = !state.bits() & full;
    let spread = ((uncertain << 1) | (uncertain >> 1)) & full;
    State::from_bits(full & !spread)
}

/// One night: propagate, then inspect `room`, which eliminates it regardless of prior belief.
#[inline]
pub fn inspect(castle: Castle, state: State, room: usize) -> State {
    debug_assert!(castle.has_room(room));
    propagate(castle, state).with_eliminated(room)
}

/// All successors of `state`, one per inspected room, in ascending room order.
///
/// The order is part of the contract: breadth-first tie-breaking depends on it.
pub fn successors(castle: Castle, state: State) -> impl Iterator<Item = (usize, State)> {
    let candidates = propagate(castle, state);
    (0..castle.rooms()).map(move |room| (room, candidates.with_eliminated(room)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Room-by-room rendition of the rule, used to cross-check the shift form.
    fn propagate_by_rooms(castle: Castle, state: State) -> State {
        let mut out = castle.full_mask();
        for room in state.uncertain_rooms(castle.rooms()) {
            for n in castle.neighbors(room) {
                out &= !(1u64 << n);
            }
        }
        State::from_bits(out)
    }

    #[test]
    fn nothing_known_means_nothing_eliminated() {
        for rooms in 2..=64 {
            let c = Castle::new(rooms).unwrap();
            assert_eq!(propagate(c, State::START), State::START, "rooms={rooms}");
        }
    }

    #[test]
    fn fully_eliminated_stays_fully_eliminated() {
        for rooms in 1..=64 {
            let c = Castle::new(rooms).unwrap();
            assert_eq!(propagate(c, c.goal()), c.goal(), "rooms={rooms}");
        }
    }

    #[test]
    fn single_room_castle_is_always_eliminated() {
        let c = Castle::new(1).unwrap();
        assert_eq!(propagate(c, State::START), c.goal());
    }

    #[test]
    fn uncertainty_leaves_its_room_and_spreads_to_neighbors() {
        let c = Castle::new(5).unwrap();
        // Only room 2 uncertain: rooms 1 and 3 become uncertain, room 2 itself is cleared.
        let s = State::from_bits(0b11011);
        assert_eq!(propagate(c, s), State::from_bits(0b10101));
    }

    #[test]
    fn shift_form_matches_room_by_room_rule_for_small_castles() {
        for rooms in 1..=8 {
            let c = Castle::new(rooms).unwrap();
            for bits in 0..=c.full_mask() {
                let s = State::from_bits(bits);
                assert_eq!(propagate(c, s), propagate_by_rooms(c, s), "rooms={rooms} s={s}");
            }
        }
    }

    #[test]
    fn successors_are_in_ascending_room_order() {
        let c = Castle::new(4).unwrap();
        let rooms: Vec<usize> = successors(c, State::START).map(|(r, _)| r).collect();
        assert_eq!(rooms, vec![0, 1, 2, 3]);
        for (room, next) in successors(c, State::START) {
            assert_eq!(next, inspect(c, State::START, room));
            assert!(next.is_eliminated(room));
        }
    }
}
