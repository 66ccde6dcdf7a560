mod input;
mod settings;
mod surface;

use std::fs::File;
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{cursor, execute, terminal};
use game_core::{FileStore, FrameInput, Game};
use glam::Vec2;
use tracing_subscriber::filter::EnvFilter;

use input::{translate, Command, KeyTracker};
use settings::{Settings, SETTINGS_FILE};
use surface::TerminalSurface;

/// Raw mode, alternate screen and mouse capture for as long as it lives
struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    fn enter(out: &mut Stdout) -> Result<Self> {
        let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);

        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let guard = Self { keyboard_enhanced };
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::DisableLineWrap,
            cursor::Hide,
            EnableMouseCapture
        )?;
        if keyboard_enhanced {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.keyboard_enhanced {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            out,
            DisableMouseCapture,
            cursor::Show,
            terminal::EnableLineWrap,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(game: &mut Game<FileStore>, frame_rate: u32) -> Result<()> {
    let mut out = io::stdout();
    let guard = TerminalGuard::enter(&mut out)?;

    let (columns, rows) = terminal::size()?;
    let world = Vec2::new(game.config().window_width, game.config().window_height);
    let mut surface = TerminalSurface::new(world, columns, rows);
    let mut keys = KeyTracker::new(guard.keyboard_enhanced);

    let frame = Duration::from_secs(1) / frame_rate;
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let mut frame_input = FrameInput::default();

        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if let Event::Resize(columns, rows) = event {
                if surface.size() != (columns, rows) {
                    tracing::debug!(columns, rows, "terminal resized");
                    surface.resize(columns, rows);
                }
                continue;
            }
            match translate(&event, &mut keys, frame_start) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Confirm) => frame_input.confirm = true,
                Some(Command::Click { column, row }) => {
                    frame_input.pointer_down = Some(surface.cell_to_world(column, row));
                }
                None => {}
            }
        }
        frame_input.controls = keys.controls(frame_start);

        let dt = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;
        game.tick(dt, &frame_input, &mut surface);
        surface.flush(&mut out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

fn main() -> Result<()> {
    let (settings, settings_error) = match Settings::load(Path::new(SETTINGS_FILE)) {
        Ok(settings) => (settings.unwrap_or_default(), None),
        Err(e) => (Settings::default(), Some(e)),
    };

    init_logging(&settings.client.log_path)?;
    if let Some(e) = settings_error {
        tracing::warn!("using default settings: {e:#}");
    }

    let store = FileStore::new(&settings.client.high_score_path);
    let mut game = Game::new(settings.game, store);
    tracing::info!(
        high_score = game.high_score(),
        frame_rate = settings.client.frame_rate,
        "pong started"
    );

    let result = run(&mut game, settings.client.frame_rate);
    match &result {
        Ok(()) => tracing::info!("pong exited"),
        Err(e) => tracing::error!("pong stopped: {e:#}"),
    }
    result
}
