//! Brick game console host (default binary).
//!
//! Plays the attract splash, then shows the live field with its status panel.
//! Game rules are not part of this program: Space awards demo points so the
//! score and high-score handling can be seen working.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use brick_surface::config::AppConfig;
use brick_surface::core::{FieldSnapshot, ScoreStore, TextSplashSource};
use brick_surface::input::{handle_key_event, should_quit, HostAction};
use brick_surface::sound::ProcessSoundPlayer;
use brick_surface::store::JsonScoreStore;
use brick_surface::term::{DisplaySink, RenderSurface, TerminalSink};
use brick_surface::types::TICK_MS;

const DEMO_POINTS: u32 = 10;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalSink::new()?;
    let (width, height) = term.size();
    log::info!("terminal is {width}x{height}");
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("{e:#}");
    }
    result
}

/// Log to `BRICK_LOG_PATH` when set; stderr would draw over the surface.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalSink, config: &AppConfig) -> Result<()> {
    let store = JsonScoreStore::open(&config.score_path)?;
    log::info!("{} high scores in {}", store.len(), store.path().display());
    let splash = TextSplashSource::new(&config.splash_dir);
    log::info!("splash resources under {}", splash.root().display());
    let mut surface = RenderSurface::new(config.surface_x, config.surface_y, term, store)?
        .with_splash_source(splash);
    if !config.sound_disabled {
        surface = surface.with_sound(ProcessSoundPlayer::new(&config.sound_command));
    }

    let mut game = 0usize;
    surface.init_game(&config.games[game]);
    start_attract(&mut surface, config);

    let field = FieldSnapshot::empty();
    let mut paused = false;
    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        if surface.is_splash_playing() {
            surface.render(None)?;
        } else if !paused {
            surface.render(Some(&field))?;
        }

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }

                match handle_key_event(key) {
                    Some(HostAction::Pause) => {
                        paused = !paused;
                        surface.set_pause(paused)?;
                        if paused {
                            surface.stop_sound()?;
                        }
                    }
                    Some(action @ (HostAction::NextGame | HostAction::PreviousGame)) => {
                        let count = config.games.len();
                        game = if action == HostAction::NextGame {
                            (game + 1) % count
                        } else {
                            (game + count - 1) % count
                        };
                        paused = false;
                        surface.set_pause(false)?;
                        surface.init_game(&config.games[game]);
                        start_attract(&mut surface, config);
                    }
                    Some(HostAction::Reset) => {
                        let name = surface.game_name().to_string();
                        surface.init_game(&name);
                        surface.stop_splash();
                    }
                    Some(HostAction::Score) if !paused && !surface.is_splash_playing() => {
                        surface.set_score(surface.score().saturating_add(DEMO_POINTS));
                        if let Some(sound) = &config.score_sound {
                            if let Err(e) = surface.play_sound(sound) {
                                log::warn!("{e:#}");
                            }
                        }
                    }
                    Some(HostAction::SkipSplash) => surface.stop_splash(),
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
        }
    }
}

/// Play the attract splash if the resource exists; the game is shown either way.
fn start_attract<D: DisplaySink, S: ScoreStore>(
    surface: &mut RenderSurface<D, S>,
    config: &AppConfig,
) {
    if let Err(e) = surface.set_splash(&config.splash_name, config.splash_timeout_ms) {
        log::warn!("{e:#}");
    }
}
