//! Terminal runner (default binary).
//!
//! Reads configuration from the environment, drives a [`Session`] from
//! crossterm key events and the gravity clock, and draws every change through
//! the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use blocktris::core::rng::PieceSource;
use blocktris::core::GameState;
use blocktris::engine::{AudioOutput, AudioSink, EngineConfig, NullAudio, Session, TerminalBell};
use blocktris::input::{map_key, should_quit};
use blocktris::logging;
use blocktris::stimulus_for;
use blocktris::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};

/// Input wait while no gravity tick is pending (idle, paused, game over)
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    logging::init(&config)?;

    let sink: Box<dyn AudioSink> = if config.bell {
        Box::new(TerminalBell::stdout())
    } else {
        Box::new(NullAudio)
    };
    let mut session = Session::new(
        GameState::new(config.piece_source()),
        AudioOutput::new(sink, config.muted),
    );
    info!(seed = ?config.seed, muted = config.muted, "blocktris starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = session.game().score(), "blocktris exiting");
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session<Box<dyn PieceSource>>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let hud = HudView {
                muted: session.is_muted(),
            };
            view.render_into(&session.snapshot(), hud, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Wait for input, but never past the next gravity deadline.
        let timeout = session.time_until_tick(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        dirty |= session.handle(stimulus_for(action), Instant::now());
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        dirty |= session.poll_clock(Instant::now());
    }
}
