//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_2048::term`.

use std::fs::OpenOptions;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use tui_2048::app::App;
use tui_2048::cli::Args;
use tui_2048::core::SimpleRng;
use tui_2048::store::{ScoreKeeper, ScoreStore};
use tui_2048::term::{FrameBuffer, TerminalRenderer, Viewport};
use tui_2048::types::TICK_MS;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(SimpleRng::from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    };
    let keeper = ScoreKeeper::new(ScoreStore::load(args.scores_path()));
    let mut app = App::new(args.mode, rng, keeper, args.share_url.clone());

    let mut term = TerminalRenderer::new().with_mouse_capture(true);
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    app.shutdown();
    result
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // The terminal is ours while the game runs, so logs only go to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run<R: RngCore>(term: &mut TerminalRenderer, app: &mut App<R>) -> Result<()> {
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input, waiting at most one tick.
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
