//! Terminal tower-stacking runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! a framebuffer-based renderer, and drives one simulation tick per frame at
//! ~60 Hz. Gold is loaded once at startup and saved once on exit; the high
//! score file is updated once per game over.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tower::core::{GameSnapshot, GameState};
use tui_tower::input::{handle_key_event, should_quit};
use tui_tower::store::Store;
use tui_tower::term::{TerminalRenderer, TowerView, Viewport};
use tui_tower::types::{RoundEvent, TICK_MS};

fn main() -> Result<()> {
    // Log to stderr (RUST_LOG); the alternate screen keeps stdout for the game.
    env_logger::init();

    let store = Store::open()?;
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &store);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, store: &Store) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut game = GameState::with_gold(seed, store.load_gold());
    game.start();

    let view = TowerView::default();
    let mut snapshot = GameSnapshot::default();
    let mut high_score = store.load_high_score();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snapshot);
        let fb = view.render(&snapshot, high_score, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(game_event) = handle_key_event(key) {
                        game.apply_event(game_event);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);

            if let Some(RoundEvent::RoundOver { score }) = game.take_last_event() {
                store.update_high_score(score);
                high_score = store.load_high_score();
            }
        }
    }

    store.save_gold(game.gold());
    Ok(())
}
