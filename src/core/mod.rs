//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, timers, or I/O; drivers feed it elapsed
//! time and commands and read snapshots back.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{GameState, Piece};
pub use rng::{PiecePicker, SimpleRng};
pub use shapes::{shape_of, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
