//! Save domain — the persisted high-score ledger.
//!
//! Scores are read once play data is configured, folded in from the session
//! counters every `SAVE_PERIOD` ticks and whenever the game pauses, and
//! written back through a temp file.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use bevy::prelude::*;
use crate::shared::*;

pub mod leaderboard;

use leaderboard::{load_ledger, save_ledger, ScoreLedger};

/// Ticks between periodic score saves.
pub const SAVE_PERIOD: u32 = 7200;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSaveTimer {
    pub ticks_remaining: u32,
}

impl Default for ScoreSaveTimer {
    fn default() -> Self {
        Self {
            ticks_remaining: SAVE_PERIOD,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScoreLedger>()
            .init_resource::<ScoreSaveTimer>()
            // The score path comes from the config, which is read while Loading.
            .add_systems(OnExit(GameState::Loading), load_scores)
            .add_systems(OnEnter(GameState::Paused), record_and_save_scores)
            .add_systems(FixedUpdate, periodic_score_save.in_set(TickSet::Persistence));
    }
}

pub fn current_timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Folds the session into the ledger and writes it out. Failures are logged
/// and otherwise ignored; the next save supersedes this one.
pub fn commit_scores(ledger: &mut ScoreLedger, config: &GameConfig, stats: &SessionStats) {
    ledger.fold_session(&config.player_name, stats, current_timestamp_millis());
    match save_ledger(ledger, Path::new(&config.score_file)) {
        Ok(()) => info!("[Scores] Saved to {}", config.score_file),
        Err(e) => warn!("[Scores] Save FAILED: {}", e),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

fn load_scores(mut ledger: ResMut<ScoreLedger>, config: Res<GameConfig>) {
    match load_ledger(Path::new(&config.score_file)) {
        Ok(loaded) => {
            info!(
                "[Scores] Loaded {} / {} / {} entries from {}",
                loaded.mosquitoes.len(),
                loaded.campfire.len(),
                loaded.distance.len(),
                config.score_file
            );
            *ledger = loaded;
        }
        Err(e) => warn!("[Scores] {}; starting with empty boards", e),
    }
}

pub fn record_and_save_scores(
    mut ledger: ResMut<ScoreLedger>,
    config: Res<GameConfig>,
    stats: Res<SessionStats>,
) {
    commit_scores(&mut ledger, &config, &stats);
}

pub fn periodic_score_save(
    mut timer: ResMut<ScoreSaveTimer>,
    mut ledger: ResMut<ScoreLedger>,
    config: Res<GameConfig>,
    stats: Res<SessionStats>,
) {
    if timer.ticks_remaining > 0 {
        timer.ticks_remaining -= 1;
        return;
    }
    timer.ticks_remaining = SAVE_PERIOD;
    commit_scores(&mut ledger, &config, &stats);
}
