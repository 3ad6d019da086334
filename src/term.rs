//! Terminal front end: draws an engine snapshot to a real terminal.
//!
//! Full redraw per frame; the board is small enough that diffing is not
//! worth the bookkeeping. The renderer owns raw-mode/alternate-screen setup
//! and is careful to restore the terminal on exit.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Each board cell is rendered two characters wide to look square
const CELL_WIDTH: u16 = 2;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame: playfield with the active piece overlaid, score panel,
    /// and a game-over banner when the session has ended.
    pub fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let grid = compose_grid(snapshot);
        let board_right = BOARD_WIDTH as u16 * CELL_WIDTH + 2;

        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;

        // Top border
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(Print(border_line()))?;

        for (y, row) in grid.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, y as u16 + 1))?;
            self.stdout.queue(Print("|"))?;
            for cell in row {
                match cell {
                    Some(kind) => {
                        let (r, g, b) = kind.color();
                        self.stdout
                            .queue(SetBackgroundColor(Color::Rgb { r, g, b }))?;
                        self.stdout.queue(Print("  "))?;
                        self.stdout.queue(ResetColor)?;
                    }
                    None => {
                        self.stdout.queue(SetForegroundColor(Color::DarkGrey))?;
                        self.stdout.queue(Print(" ."))?;
                        self.stdout.queue(ResetColor)?;
                    }
                }
            }
            self.stdout.queue(Print("|"))?;
        }

        // Bottom border
        self.stdout
            .queue(cursor::MoveTo(0, BOARD_HEIGHT as u16 + 1))?;
        self.stdout.queue(Print(border_line()))?;

        // Side panel
        self.stdout.queue(cursor::MoveTo(board_right + 2, 1))?;
        self.stdout
            .queue(Print(format!("Score: {}", snapshot.score)))?;
        self.stdout.queue(cursor::MoveTo(board_right + 2, 3))?;
        self.stdout.queue(Print("arrows/hjkl move & rotate"))?;
        self.stdout.queue(cursor::MoveTo(board_right + 2, 4))?;
        self.stdout.queue(Print("space drop  r restart  q quit"))?;

        if snapshot.game_over() {
            self.stdout
                .queue(cursor::MoveTo(board_right + 2, 6))?
                .queue(SetForegroundColor(Color::Red))?
                .queue(Print("GAME OVER"))?
                .queue(ResetColor)?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn border_line() -> String {
    let mut line = String::with_capacity(BOARD_WIDTH as usize * CELL_WIDTH as usize + 2);
    line.push('+');
    for _ in 0..BOARD_WIDTH as usize * CELL_WIDTH as usize {
        line.push('-');
    }
    line.push('+');
    line
}

/// Merge the active piece into a copy of the board cells.
///
/// Cells above the top edge are simply not drawn.
fn compose_grid(
    snapshot: &GameSnapshot,
) -> [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
    let mut grid = snapshot.board;
    let active = &snapshot.active;
    for (dx, dy) in active.shape.offsets() {
        let px = active.x + dx;
        let py = active.y + dy;
        if px >= 0 && px < BOARD_WIDTH as i8 && py >= 0 && py < BOARD_HEIGHT as i8 {
            grid[py as usize][px as usize] = Some(active.kind);
        }
    }
    grid
}
