//! Game rules: legality, run detection and turn progression.
//!
//! - `Oracle`: pure legality queries over a `Board`
//! - `TurnState`: the phase/active-player state machine
//!
//! Neither owns the board; `DaraGame` ties them together.

pub mod oracle;
pub mod turn;

pub use oracle::{Oracle, RunLengths};
pub use turn::{Announcement, Phase, TurnState};
