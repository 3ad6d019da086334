//! Terminal falling-block puzzle.
//!
//! The engine lives in [`core`] and is a pure library surface: it receives
//! abstract commands and elapsed-time ticks and exposes a read-only snapshot.
//! [`input`] and [`term`] are the terminal collaborators the binary wires
//! around it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
