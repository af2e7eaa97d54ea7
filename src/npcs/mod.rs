//! NPC domain plugin for Camp Haliburton.
//!
//! Manages the three Scouters: their dialogue sessions, the scripts they
//! speak, and the single quest line they share.
//! Communicates exclusively through shared resources and events.

use bevy::prelude::*;
use crate::shared::*;

pub mod dialogue;
pub mod quests;
pub mod scripts;
mod spawning;

use quests::{apply_quest_advances, handle_scouter_interactions, tick_dialogue};
use spawning::spawn_scouters;

pub struct NpcPlugin;

impl Plugin for NpcPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_scouters);

        // Advances run last so that every trigger raised this tick, from any
        // domain, is checked against the same stage.
        app.add_systems(
            FixedUpdate,
            (handle_scouter_interactions, tick_dialogue, apply_quest_advances)
                .chain()
                .in_set(TickSet::Quests),
        );
    }
}
