//! World domain plugin for Camp Haliburton.
//!
//! Responsible for:
//! - Ordering the phases of each simulation tick
//! - Spawning the fixed plants and campfires when play first starts
//! - The swaying background

use bevy::prelude::*;

use crate::data::layout::{plant_base, CAMPFIRE_XS, PLANT_LAYOUT};
use crate::economy::campfire::{CAMPFIRE_HEIGHT, CAMPFIRE_WIDTH, CAMPFIRE_Y};
use crate::shared::*;

pub mod background;

use background::{sway_background, BackgroundSway};

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BackgroundSway>();

        configure_tick_sets(app);

        app.add_systems(OnEnter(GameState::Playing), spawn_world)
            .add_systems(FixedUpdate, sway_background.in_set(TickSet::Background));
    }
}

/// Chains the tick phases in order and gates them on `Playing`.
pub fn configure_tick_sets(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (
            TickSet::Background,
            TickSet::Player,
            TickSet::Camera,
            TickSet::Plants,
            TickSet::Campfires,
            TickSet::Items,
            TickSet::Mosquitoes,
            TickSet::Spawning,
            TickSet::Quests,
            TickSet::Persistence,
        )
            .chain()
            .run_if(in_state(GameState::Playing)),
    );
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWNING
// ═══════════════════════════════════════════════════════════════════════

/// Creates every plant and campfire. Only the first entry into `Playing`
/// spawns anything; resuming from pause finds them already present.
pub fn spawn_world(mut commands: Commands, existing: Query<(), With<Plant>>) {
    if !existing.is_empty() {
        return;
    }

    for (x, kind, mirrored) in PLANT_LAYOUT {
        let size = kind.profile().size;
        commands.spawn((
            Plant::new(kind, mirrored),
            MapPosition(plant_base(x, kind)),
            ScreenX::default(),
            Footprint {
                width: size.x,
                height: size.y,
            },
        ));
    }

    for x in CAMPFIRE_XS {
        commands.spawn((
            Campfire::default(),
            MapPosition(Vec2::new(x, CAMPFIRE_Y)),
            ScreenX::default(),
            Footprint {
                width: CAMPFIRE_WIDTH,
                height: CAMPFIRE_HEIGHT,
            },
        ));
    }

    info!(
        "[World] Spawned {} plants and {} campfires",
        PLANT_LAYOUT.len(),
        CAMPFIRE_XS.len()
    );
}
