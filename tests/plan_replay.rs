use princess_castle::rules::propagate::inspect;
use princess_castle::scenario::Scenario;
use princess_castle::scenarios;
use princess_castle::search::bfs::search;
use princess_castle::search::reconstruct::reconstruct;
use princess_castle::solution::{replay, solve, verify_catches_every_walk};

#[test]
fn replaying_the_moves_reaches_the_goal_without_the_table() {
    for rooms in 1..=16 {
        let scn = scenarios::sized(rooms).unwrap();
        let solved = solve(&scn).unwrap();
        let states = replay(scn.castle, &solved.plan.moves).unwrap();
        assert_eq!(states, solved.plan.states, "rooms={rooms}");
        assert_eq!(*states.last().unwrap(), scn.goal, "rooms={rooms}");
    }
}

#[test]
fn every_plan_catches_every_walk() {
    for rooms in 1..=16 {
        let solved = solve(&scenarios::sized(rooms).unwrap()).unwrap();
        verify_catches_every_walk(solved.plan.castle, &solved.plan.moves)
            .unwrap_or_else(|e| panic!("rooms={rooms}: {e}"));
    }
}

#[test]
fn dropping_the_last_night_no_longer_catches() {
    for rooms in 2..=12 {
        let solved = solve(&scenarios::sized(rooms).unwrap()).unwrap();
        let short = &solved.plan.moves[..solved.plan.nights() - 1];
        assert!(
            verify_catches_every_walk(solved.plan.castle, short).is_err(),
            "rooms={rooms}"
        );
    }
}

#[test]
fn every_table_entry_is_reproduced_by_its_recorded_move() {
    let scn = Scenario {
        stop_at_goal: false,
        ..scenarios::sized(10).unwrap()
    };
    let res = search(&scn).unwrap();
    for (state, entry) in res.table.iter() {
        if state == scn.start {
            assert_eq!(entry.predecessor, scn.start);
            assert_eq!(entry.room, 0);
            continue;
        }
        assert_eq!(inspect(scn.castle, entry.predecessor, entry.room), state);
        assert!(res.table.contains(entry.predecessor));
    }
}

#[test]
fn recorded_chains_are_shortest_paths() {
    // Depth along recorded chains never exceeds the BFS layer of any other path: a recorded
    // predecessor is always exactly one layer shallower.
    let scn = Scenario {
        stop_at_goal: false,
        ..scenarios::sized(8).unwrap()
    };
    let res = search(&scn).unwrap();
    let depth = |s| reconstruct(&res.table, scn.start, s).unwrap().len();

    for (state, _) in res.table.iter() {
        let d = depth(state);
        for room in 0..scn.castle.rooms() {
            let next = inspect(scn.castle, state, room);
            assert!(depth(next) <= d + 1, "{state} -> {next}");
        }
    }
}

#[test]
fn repeated_searches_give_identical_plans() {
    let a = solve(&scenarios::reference()).unwrap();
    let b = solve(&scenarios::reference()).unwrap();
    assert_eq!(a.plan, b.plan);
}

#[test]
fn draining_the_queue_does_not_change_the_plan() {
    let early = solve(&scenarios::reference()).unwrap();
    let drained = solve(&scenarios::reference_exhaustive()).unwrap();
    assert_eq!(early.plan, drained.plan);
    assert!(drained.stats.discovered >= early.stats.discovered);
}
