//! Guaranteed search strategies for the "princess in the castle" puzzle.
//!
//! A princess hides in one of N rooms in a line and moves to an adjacent room every night. One
//! room may be inspected per night. The crate finds a fixed inspection sequence that catches her
//! no matter where she starts or how she moves, using a breadth-first search over elimination
//! bitmasks.

pub mod core;
pub mod render;
pub mod rules;
pub mod scenario;
pub mod scenarios;
pub mod search;
pub mod solution;
