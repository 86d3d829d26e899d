//! Board zones and piece placement.
//!
//! The board has three disjoint zones: the shared `Main` grid and one
//! reserve grid per player. Every coordinate carries its `Zone` explicitly.
//!
//! ## Key Types
//!
//! - `Zone`: Which grid a coordinate belongs to
//! - `Cell` / `Location`: Grid coordinate, and coordinate tagged with a zone
//! - `Grid`: Fixed-size row-major storage for one zone
//! - `Board`: All three grids plus placement primitives

pub mod board;

pub use board::{Board, Cell, Direction, Grid, Location, Zone};
