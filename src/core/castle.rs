use crate::core::state::State;
use crate::scenario::SearchError;

/// Widest castle a [`State`] can describe (one bit per room in a `u64`).
pub const MAX_ROOMS: usize = u64::BITS as usize;

/// A line of rooms; room `i` is adjacent to rooms `i - 1` and `i + 1` when they exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Castle {
    rooms: usize,
}

impl Castle {
    /// Validate a room count. Zero rooms and anything wider than [`MAX_ROOMS`] are rejected
    /// instead of truncated.
    pub fn new(rooms: usize) -> Result<Self, SearchError> {
        if rooms == 0 {
            return Err(SearchError::InvalidCastle {
                rooms,
                reason: "a castle needs at least one room".to_string(),
            });
        }
        if rooms > MAX_ROOMS {
            return Err(SearchError::InvalidCastle {
                rooms,
                reason: format!("at most {MAX_ROOMS} rooms fit in a state bitmask"),
            });
        }
        Ok(Self { rooms })
    }

    #[inline]
    pub fn rooms(self) -> usize {
        self.rooms
    }

    /// Mask with one bit set per room.
    #[inline]
    pub fn full_mask(self) -> u64 {
        if self.rooms == MAX_ROOMS {
            u64::MAX
        } else {
            (1u64 << self.rooms) - 1
        }
    }

    /// Every room eliminated.
    #[inline]
    pub fn goal(self) -> State {
        State::from_bits(self.full_mask())
    }

    /// True if `state` has no bits outside the castle.
    #[inline]
    pub fn contains(self, state: State) -> bool {
        state.bits() & !self.full_mask() == 0
    }

    #[inline]
    pub fn has_room(self, room: usize) -> bool {
        room < self.rooms
    }

    /// In-range neighbors of `room`, lower index first.
    #[inline]
    pub fn neighbors(self, room: usize) -> impl Iterator<Item = usize> {
        let below = room.checked_sub(1);
        let above = Some(room + 1).filter(|&r| r < self.rooms);
        below.into_iter().chain(above)
    }

    /// Upper bound on distinct states (2^N, saturating for wide castles).
    #[inline]
    pub fn state_space(self) -> u64 {
        1u64.checked_shl(self.rooms as u32).unwrap_or(u64::MAX)
    }
}
