use proptest::prelude::*;

use princess_castle::core::castle::Castle;
use princess_castle::core::state::State;
use princess_castle::rules::propagate::{inspect, propagate, successors};
use princess_castle::solution::{replay, verify_catches_every_walk};

fn castle_and_state() -> impl Strategy<Value = (Castle, State)> {
    (1usize..=64).prop_flat_map(|rooms| {
        let castle = Castle::new(rooms).unwrap();
        (Just(castle), 0..=castle.full_mask()).prop_map(|(c, bits)| (c, State::from_bits(bits)))
    })
}

proptest! {
    #[test]
    fn eliminated_iff_every_neighbor_was_eliminated((castle, s) in castle_and_state()) {
        let p = propagate(castle, s);
        prop_assert!(castle.contains(p));
        for room in 0..castle.rooms() {
            let expect = castle.neighbors(room).all(|n| s.is_eliminated(n));
            prop_assert_eq!(p.is_eliminated(room), expect, "room {}", room);
        }
    }

    #[test]
    fn more_knowledge_never_yields_less((castle, s) in castle_and_state(), extra in any::<u64>()) {
        let t = State::from_bits((s.bits() | extra) & castle.full_mask());
        let ps = propagate(castle, s).bits();
        let pt = propagate(castle, t).bits();
        prop_assert_eq!(ps & !pt, 0);
    }

    #[test]
    fn inspected_room_is_always_eliminated((castle, s) in castle_and_state(), pick in any::<usize>()) {
        let room = pick % castle.rooms();
        let next = inspect(castle, s, room);
        prop_assert!(next.is_eliminated(room));
        prop_assert_eq!(next.bits() & !(1u64 << room), propagate(castle, s).bits() & !(1u64 << room));
    }

    #[test]
    fn successors_cover_each_room_once((castle, s) in castle_and_state()) {
        let rooms: Vec<usize> = successors(castle, s).map(|(r, _)| r).collect();
        prop_assert_eq!(rooms, (0..castle.rooms()).collect::<Vec<_>>());
    }

    #[test]
    fn replay_and_walk_check_agree(rooms in 1usize..=12, picks in proptest::collection::vec(any::<usize>(), 0..30)) {
        let castle = Castle::new(rooms).unwrap();
        let moves: Vec<usize> = picks.iter().map(|p| p % rooms).collect();
        let last = *replay(castle, &moves).unwrap().last().unwrap();
        let caught = verify_catches_every_walk(castle, &moves).is_ok();
        prop_assert_eq!(caught, last == castle.goal());
    }
}
