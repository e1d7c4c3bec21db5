//! Strategy search: breadth-first traversal, its visited-state table and path reconstruction.

pub mod bfs;
pub mod reconstruct;
pub mod resources;
pub mod table;
