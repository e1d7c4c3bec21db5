use std::fmt;

use serde::{Deserialize, Serialize};

/// Elimination status of every room, one bit per room.
///
/// Bit `i` set means room `i` is eliminated (the princess is certainly not there); clear means
/// she may still be there. States are values: every transition builds a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(u64);

impl State {
    /// Total uncertainty.
    pub const START: State = State(0);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_eliminated(self, room: usize) -> bool {
        (self.0 >> room) & 1 == 1
    }

    #[inline]
    pub const fn with_eliminated(self, room: usize) -> Self {
        Self(self.0 | 1u64 << room)
    }

    #[inline]
    pub const fn eliminated_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Rooms in `0..rooms` that are still uncertain, ascending.
    pub fn uncertain_rooms(self, rooms: usize) -> impl Iterator<Item = usize> {
        (0..rooms).filter(move |&r| !self.is_eliminated(r))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}
