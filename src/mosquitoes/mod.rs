//! Mosquito domain — hostile agents, wave spawning and swat resolution.

use bevy::prelude::*;
use crate::shared::*;

pub mod agent;
pub mod waves;

use agent::move_mosquitoes;
use waves::{resolve_swats, spawn_waves, MosquitoSpawner};

pub struct MosquitoPlugin;

impl Plugin for MosquitoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MosquitoSpawner>();

        app.add_systems(
            FixedUpdate,
            (move_mosquitoes, resolve_swats)
                .chain()
                .in_set(TickSet::Mosquitoes),
        );
        app.add_systems(FixedUpdate, spawn_waves.in_set(TickSet::Spawning));
    }
}
