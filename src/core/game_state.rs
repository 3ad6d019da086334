//! Game state module - one falling-block play-through
//!
//! Ties together the board, the shape catalog, and the piece picker. Owns the
//! gravity accumulator, command dispatch, the lock sequence, and the
//! RUNNING -> GAME_OVER transition. Every operation either fully applies or
//! leaves the session untouched; illegal moves report failure instead of
//! erroring.

use crate::core::rng::PiecePicker;
use crate::core::scoring::line_clear_score;
use crate::core::shapes::{shape_of, Shape};
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::core::Board;
use crate::types::{Command, Phase, PieceKind, BOARD_WIDTH, FALL_INTERVAL_MS};

/// Active falling piece: a catalog shape instance with an anchor.
///
/// `shape` is the current (possibly rotated) matrix; `x`/`y` locate its
/// top-left corner on the grid. The piece lives exactly from spawn to lock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of the given kind, horizontally centered at the top
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = shape_of(kind);
        Self {
            kind,
            shape,
            x: (BOARD_WIDTH as i8) / 2 - (shape.cols() as i8) / 2,
            y: 0,
        }
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    picker: PiecePicker,
    score: u32,
    phase: Phase,
    /// Elapsed time accumulated toward the next gravity step
    fall_timer_ms: u32,
}

impl GameState {
    /// Create a new session with the given RNG seed and spawn the first piece
    pub fn new(seed: u32) -> Self {
        let mut picker = PiecePicker::new(seed);
        let active = Piece::spawn(picker.draw());
        Self {
            board: Board::new(),
            active,
            picker,
            score: 0,
            phase: Phase::Running,
            fall_timer_ms: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn active_mut(&mut self) -> &mut Piece {
        &mut self.active
    }

    /// Copy the observable state out for a rendering layer
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot {
            board: Default::default(),
            active: ActiveSnapshot::from(&self.active),
            score: self.score,
            phase: self.phase,
        };
        self.board.write_cells(&mut snapshot.board);
        snapshot
    }

    /// Re-initialize the session: empty board, zero score, fresh spawn.
    ///
    /// The RNG stream continues rather than replaying from the seed, so a
    /// restarted game sees new pieces.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.phase = Phase::Running;
        self.fall_timer_ms = 0;
        self.active = Piece::spawn(self.picker.draw());
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// Each time the accumulator crosses the fall interval the piece moves
    /// down one row, keeping the remainder. A blocked downward step runs the
    /// lock sequence and the fresh piece starts with a zeroed accumulator.
    /// Returns true if any observable state changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        // Saturate: huge elapsed values stay valid input, and the drain
        // loop below locks the piece long before the cap matters.
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        let mut changed = false;

        while self.fall_timer_ms >= FALL_INTERVAL_MS {
            self.fall_timer_ms -= FALL_INTERVAL_MS;

            if self.try_move(0, 1) {
                changed = true;
            } else {
                self.lock_active();
                self.fall_timer_ms = 0;
                changed = true;
                break;
            }
        }

        changed
    }

    /// Apply a discrete command.
    ///
    /// Returns true if the piece moved, rotated, or locked; false for a
    /// rejected move or when the session is over. A soft drop that cannot
    /// move down locks immediately, matching hard-drop semantics.
    pub fn command(&mut self, cmd: Command) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        match cmd {
            Command::Left => self.try_move(-1, 0),
            Command::Right => self.try_move(1, 0),
            Command::SoftDrop => {
                if self.try_move(0, 1) {
                    true
                } else {
                    self.lock_active();
                    true
                }
            }
            Command::Rotate => self.try_rotate(),
            Command::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Try to translate the active piece; all-or-nothing
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let (nx, ny) = (self.active.x + dx, self.active.y + dy);
        if self.board.fits(&self.active.shape, nx, ny) {
            self.active.x = nx;
            self.active.y = ny;
            return true;
        }
        false
    }

    /// Try to rotate the active piece clockwise at its current anchor.
    ///
    /// No wall kick: if the rotated matrix does not fit where the piece
    /// stands, the rotation is rejected and the shape is left unchanged.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let rotated = self.active.shape.rotated_cw();
        if self.board.fits(&rotated, self.active.x, self.active.y) {
            self.active.shape = rotated;
            return true;
        }
        false
    }

    /// Drop the active piece until it rests, then lock it.
    ///
    /// Terminates because the board height is finite and each successful step
    /// moves strictly downward.
    pub(crate) fn hard_drop(&mut self) {
        while self.try_move(0, 1) {}
        self.lock_active();
    }

    /// Lock sequence: commit the piece, clear rows, score, spawn the next
    /// piece, and detect the end of the session.
    fn lock_active(&mut self) {
        self.board
            .lock(&self.active.shape, self.active.x, self.active.y, self.active.kind);

        let cleared = self.board.clear_full_rows();
        self.score += line_clear_score(cleared);

        self.active = Piece::spawn(self.picker.draw());
        if !self
            .board
            .fits(&self.active.shape, self.active.x, self.active.y)
        {
            self.phase = Phase::GameOver;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
