//! Built-in scenarios (compile-time configs).

use std::ops::RangeInclusive;

use crate::scenario::{Scenario, SearchError};

/// Room count of the reference puzzle.
pub const REFERENCE_ROOMS: usize = 16;

/// Castle sizes covered by the `sweep` tool.
pub const SWEEP_ROOMS: RangeInclusive<usize> = 1..=REFERENCE_ROOMS;

/// The reference puzzle: 16 rooms, from total uncertainty to a caught princess.
pub fn reference() -> Scenario {
    castle("reference", REFERENCE_ROOMS)
}

/// 3 rooms. Small enough to check by hand: inspect the middle room twice.
pub fn three_rooms() -> Scenario {
    castle("three_rooms", 3)
}

/// 5 rooms, the size of the classic riddle.
pub fn five_rooms() -> Scenario {
    castle("five_rooms", 5)
}

/// 2 rooms. Below the range where 2(N-2) nights holds.
pub fn two_rooms() -> Scenario {
    castle("two_rooms", 2)
}

/// Reference castle with the queue drained instead of stopping at the goal.
pub fn reference_exhaustive() -> Scenario {
    Scenario {
        name: "reference_exhaustive",
        stop_at_goal: false,
        ..reference()
    }
}

/// A `rooms`-room castle for `name`. Only called with sizes in `1..=MAX_ROOMS`.
fn castle(name: &'static str, rooms: usize) -> Scenario {
    match Scenario::catch_princess(name, rooms) {
        Ok(scn) => scn,
        Err(e) => unreachable!("built-in scenario {name} is invalid: {e}"),
    }
}

/// Sized castle used by the sweep; rejects counts that do not fit a state.
pub fn sized(rooms: usize) -> Result<Scenario, SearchError> {
    Scenario::catch_princess("sized", rooms)
}

/// Return a config by name.
pub fn by_name(name: &str) -> Option<Scenario> {
    match name {
        "reference" => Some(reference()),
        "reference_exhaustive" => Some(reference_exhaustive()),
        "three_rooms" => Some(three_rooms()),
        "five_rooms" => Some(five_rooms()),
        "two_rooms" => Some(two_rooms()),
        _ => None,
    }
}

/// Names of all built-in scenarios.
pub fn available_names() -> &'static [&'static str] {
    &[
        "reference",
        "reference_exhaustive",
        "three_rooms",
        "five_rooms",
        "two_rooms",
    ]
}
