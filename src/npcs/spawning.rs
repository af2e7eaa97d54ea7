//! Scouter spawning: the three camp leaders stand at fixed spots.

use bevy::prelude::*;
use crate::shared::*;

use super::dialogue::DialogueSession;
use crate::data::layout::{SCOUTER_LAYOUT, SCOUTER_SIZE};

/// Spawns every Scouter once, on the first entry into `Playing`.
pub fn spawn_scouters(mut commands: Commands, existing: Query<(), With<Scouter>>) {
    if !existing.is_empty() {
        return;
    }
    for (x, name) in SCOUTER_LAYOUT {
        commands.spawn((
            Scouter { name },
            DialogueSession::default(),
            MapPosition(Vec2::new(x, GROUND_Y)),
            ScreenX::default(),
            Footprint {
                width: SCOUTER_SIZE.x,
                height: SCOUTER_SIZE.y,
            },
        ));
        debug!("[Quest] {} takes position at x={}", name.display_name(), x);
    }
}
