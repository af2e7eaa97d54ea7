//! Data layer — runtime configuration and the fixed world layout.
//!
//! This plugin runs in OnEnter(GameState::Loading): it reads `haliburton.ron`
//! into `GameConfig`, applies the tick rate and random seed it names, then
//! transitions the game into GameState::MainMenu.

pub mod layout;

use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use crate::shared::*;

pub const CONFIG_FILE: &str = "haliburton.ron";

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Parses a config file. A missing file is not an error: it yields `None`.
pub fn load_config(path: &Path) -> Result<Option<GameConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let config = ron::from_str::<GameConfig>(&text)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Applies the timing and randomness a config asks for.
pub fn apply_config(config: &GameConfig, fixed_time: &mut Time<Fixed>, rng: &mut SimRng) {
    let millis = config.tick_millis.max(1);
    fixed_time.set_timestep(Duration::from_millis(millis));
    if let Some(seed) = config.rng_seed {
        *rng = SimRng::seeded(seed);
    }
}

fn load_all_data(
    mut config: ResMut<GameConfig>,
    mut fixed_time: ResMut<Time<Fixed>>,
    mut rng: ResMut<SimRng>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    match load_config(Path::new(CONFIG_FILE)) {
        Ok(Some(loaded)) => {
            info!("[Config] Loaded {}", CONFIG_FILE);
            *config = loaded;
        }
        Ok(None) => info!("[Config] No {} found; using defaults", CONFIG_FILE),
        Err(e) => warn!("[Config] {}; using defaults", e),
    }
    apply_config(&config, &mut fixed_time, &mut rng);
    info!(
        "[Config] Tick {} ms, player \"{}\", scores in {}",
        config.tick_millis, config.player_name, config.score_file
    );

    next_state.set(GameState::MainMenu);
}
