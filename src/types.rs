//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Frame cadence of the terminal driver (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity advances the active piece one row every interval.
/// There is no level curve; the interval is fixed for the whole session.
pub const FALL_INTERVAL_MS: u32 = 2000;

/// Points awarded per cleared row
pub const POINTS_PER_LINE: u32 = 100;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

/// All piece kinds, in catalog order
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::L,
    PieceKind::J,
    PieceKind::S,
    PieceKind::Z,
];

impl PieceKind {
    /// RGB color bound to this kind in the catalog
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0, 255, 255),
            PieceKind::O => (255, 255, 0),
            PieceKind::T => (255, 0, 255),
            PieceKind::L => (255, 165, 0),
            PieceKind::J => (0, 0, 255),
            PieceKind::S => (0, 255, 0),
            PieceKind::Z => (255, 0, 0),
        }
    }
}

/// Discrete commands accepted by the game session.
///
/// These are applied synchronously, independent of the gravity accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    SoftDrop,
    Rotate,
    HardDrop,
}

/// Session lifecycle. There is no pause state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
