//! Terminal 2048 runner (default binary).
//!
//! One thread, strictly in sequence: render, wait for a key, resolve the move,
//! play every animation frame, snap to the grid, spawn, redraw. Keys pressed
//! while an animation plays are discarded.

use std::fs::File;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::info;

use tui_2048::core::{Animation, Config, GameSession, GameSnapshot, MoveResult};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file: the terminal itself is the game screen.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut session = GameSession::new(config);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut dirty = true;

    loop {
        if dirty {
            view.render_into(&session.snapshot(), viewport(), &mut fb);
            term.present(&mut fb)?;
            dirty = false;
        }

        if !event::poll(tick)? {
            continue;
        }

        match event::read()? {
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit after {} moves", session.moves());
                    return Ok(());
                }

                match handle_key_event(key) {
                    Some(GameAction::Move(direction)) => {
                        info!("move {}", direction.as_str());
                        let before = session.snapshot();
                        if let Some(result) = session.play(direction) {
                            animate(term, &view, &before, &result, config, &mut fb)?;
                            session.spawn_tile();
                            if discard_pending_keys()? {
                                return Ok(());
                            }
                        }
                        dirty = true;
                    }
                    Some(GameAction::Restart) => {
                        session.reset();
                        dirty = true;
                    }
                    None => {}
                }
            }
            _ => {}
        }
    }
}

/// Play every frame of a move. Blocks until the last frame has been shown.
fn animate(
    term: &mut TerminalRenderer,
    view: &GameView,
    before: &GameSnapshot,
    result: &MoveResult,
    config: &Config,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let delay = Duration::from_millis(config.frame_ms as u64);
    for frame in Animation::for_move(result, config.animation_steps) {
        view.render_frame_into(before, &frame, viewport(), fb);
        term.present(fb)?;
        thread::sleep(delay);
    }
    Ok(())
}

/// Drop input queued during an animation. Returns true if a quit key was among it.
fn discard_pending_keys() -> Result<bool> {
    let mut quit = false;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key @ KeyEvent {
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            quit |= should_quit(key);
        }
    }
    Ok(quit)
}
