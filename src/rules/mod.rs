//! Movement and inspection rules for a line of rooms.

pub mod propagate;
