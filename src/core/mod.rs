//! Low-level, allocation-free primitives.
//!
//! Both types are plain `Copy` values so the search can keep them as hash-map keys:
//!
//! - [`castle`]: the validated room count and the bit width it implies.
//! - [`state`]: an elimination bitmask over the rooms of a castle.

pub mod castle;
pub mod state;
