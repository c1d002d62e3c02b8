//! Falling Frenzy - headless demo
//!
//! Drives the full state machine at a fixed 60 Hz with the autopilot at the
//! controls until the game ends, then quits. A windowed build would feed
//! real input events into the same [`InputTracker`] and rasterize the
//! returned draw commands.
//!
//! Usage: `falling-frenzy [seed]`. Set `FALLING_FRENZY_DATA` to change where
//! the high score, settings and statistics are stored.

use anyhow::{Context, Result};

use falling_frenzy::audio::{AudioManager, LogAudio};
use falling_frenzy::persistence::StoragePaths;
use falling_frenzy::platform::{InputEvent, InputTracker, Key};
use falling_frenzy::sim::autopilot;
use falling_frenzy::{Action, Game, GameConfig, Screen};

/// Fixed simulation timestep
const SIM_DT: f32 = 1.0 / 60.0;
/// Stop the demo after ten simulated minutes regardless
const MAX_FRAMES: u32 = 60 * 60 * 10;

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("seed must be an unsigned integer, got {:?}", arg))?,
        None => chrono::Local::now().timestamp_millis().unsigned_abs(),
    };
    let paths = match std::env::var_os("FALLING_FRENZY_DATA") {
        Some(dir) => StoragePaths::in_dir(dir),
        None => StoragePaths::default(),
    };

    log::info!("Falling Frenzy (headless) starting, seed {}", seed);
    let audio = AudioManager::new(Some(Box::new(LogAudio)));
    let mut game = Game::new(GameConfig::default(), paths, audio, seed);
    let mut input = InputTracker::new();

    press(&mut game, &mut input, Action::StartGame);

    let mut frames = 0;
    while game.is_running() && frames < MAX_FRAMES {
        if game.screen() == Screen::Playing {
            let steer = autopilot(game.session());
            for (key, held) in [(Key::Left, steer.left), (Key::Right, steer.right)] {
                input.handle(if held {
                    InputEvent::KeyDown(key)
                } else {
                    InputEvent::KeyUp(key)
                });
            }
        }

        let frame = game.frame(&input.frame(), SIM_DT);
        if !frame.sounds.is_empty() {
            log::trace!("frame {}: {:?}", frames, frame.sound_names());
        }
        frames += 1;

        if game.screen() == Screen::GameOver {
            break;
        }
    }

    let session = game.session();
    log::info!(
        "Demo finished after {:.1}s: score {}, best combo {}, caught {}, missed {}, high score {}",
        session.game_time,
        session.score.score,
        session.score.best_combo,
        session.objects_caught,
        session.objects_missed,
        game.high_score()
    );
    let stats = game.statistics();
    log::info!(
        "Lifetime: {} games, average {:.1}, catch rate {:.1}%, play time {}",
        stats.games_played,
        stats.average_score(),
        stats.catch_rate(),
        stats.play_time_display()
    );

    input.handle(InputEvent::Quit);
    game.frame(&input.frame(), SIM_DT);
    Ok(())
}

/// Click a menu button the way a pointer would
fn press(game: &mut Game, input: &mut InputTracker, action: Action) {
    let Some(center) = game
        .menu()
        .and_then(|m| m.button(action).map(|b| b.rect.center()))
    else {
        log::warn!("No {:?} button on {:?}", action, game.screen());
        return;
    };
    input.handle(InputEvent::PointerMoved(center));
    input.handle(InputEvent::PointerDown);
    input.handle(InputEvent::PointerUp);
    game.frame(&input.frame(), SIM_DT);
}
