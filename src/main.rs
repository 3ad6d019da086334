//! Terminal falling-block runner (default binary).
//!
//! Drives one engine session from a real-time clock: key events become
//! commands, measured elapsed time becomes gravity ticks, and the snapshot
//! is redrawn after each frame. The engine itself never touches the clock
//! or the terminal.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::GameState;
use tui_blockfall::input::{map_key_event, should_quit, should_restart};
use tui_blockfall::term::TerminalRenderer;
use tui_blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let seed = std::process::id();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut game = GameState::new(seed);
    let frame_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        term.draw(&game.snapshot())?;

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if should_restart(key) {
                        game.reset();
                    } else if let Some(cmd) = map_key_event(key) {
                        game.command(cmd);
                    }
                }
            }
        }

        // Feed the real elapsed time into the gravity clock.
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_frame).as_millis() as u32;
        if elapsed_ms >= TICK_MS {
            last_frame = now;
            game.tick(elapsed_ms);
        }
    }
}
