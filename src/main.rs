//! Echoes in the Dark entry point
//!
//! Runs the simulation headless with a scripted walk through the first
//! room, logging what the enemy does. Set `RUST_LOG=debug` to see every
//! state change.
//!
//! Usage: `echoes-in-the-dark [map.json] [settings.json]`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use echoes_in_the_dark::consts::SIM_DT;
use echoes_in_the_dark::input::HeldKeys;
use echoes_in_the_dark::persistence::SaveSystem;
use echoes_in_the_dark::room::load_tile_grid;
use echoes_in_the_dark::sim::EnemyState;
use echoes_in_the_dark::{Game, Result, Settings};

/// Frames to hold each scripted key combination
const SCRIPT_FRAMES: u32 = 90;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Echoes in the Dark (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let mut args = std::env::args().skip(1);
    let map_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir.join("map1.json"));
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir.join("settings.json"));

    let settings = Settings::load(&settings_path)?;
    let grid = load_tile_grid(&map_path)?;
    let mut game = Game::new(grid, &settings)?;

    let script = [
        HeldKeys {
            right: true,
            ..Default::default()
        },
        HeldKeys {
            down: true,
            right: true,
            ..Default::default()
        },
        HeldKeys {
            down: true,
            ..Default::default()
        },
        HeldKeys::default(),
    ];

    let mut spotted_frames = 0u32;
    for keys in script {
        game.input.intent = keys.intent();
        for _ in 0..SCRIPT_FRAMES {
            game.advance(SIM_DT);
            let snapshot = game.snapshot();
            if snapshot
                .enemies
                .iter()
                .any(|enemy| enemy.state == EnemyState::Chase)
            {
                spotted_frames += 1;
            }
        }
    }

    let snapshot = game.snapshot();
    log::info!(
        "After {} frames: player at {:?}, chased for {} frames",
        snapshot.frame,
        snapshot.player_position,
        spotted_frames
    );
    for (index, enemy) in snapshot.enemies.iter().enumerate() {
        let lit = if enemy.lit { " (in flashlight)" } else { "" };
        log::info!(
            "Enemy {} at {:?}: {:?}{}",
            index,
            enemy.position,
            enemy.state,
            lit
        );
    }

    let saves = SaveSystem::new(std::env::temp_dir().join("echoes_in_the_dark").join("save.json"));
    saves.save(&game.state.save_data())?;
    Ok(())
}
