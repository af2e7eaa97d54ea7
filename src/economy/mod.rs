//! Economy domain — plant drops, world items, pickups and campfires.
//!
//! All cross-domain communication goes through `crate::shared::*` events and resources.
//! No other domain module is imported here.

use bevy::prelude::*;
use crate::shared::*;

pub mod campfire;
pub mod items;
pub mod plants;

use campfire::{burn_campfires, handle_campfire_actions};
use items::{resolve_pickups, spawn_dropped_items, update_item_physics, DropCounter};
use plants::tick_plants;

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DropCounter>();

        app.add_systems(FixedUpdate, tick_plants.in_set(TickSet::Plants));

        app.add_systems(
            FixedUpdate,
            (handle_campfire_actions, burn_campfires)
                .chain()
                .in_set(TickSet::Campfires),
        );

        // New drops (from plants, the player, respawns and Scouters) become
        // entities before physics runs, so they fall on the tick they appear.
        app.add_systems(
            FixedUpdate,
            (
                spawn_dropped_items,
                apply_deferred,
                update_item_physics,
                resolve_pickups,
            )
                .chain()
                .in_set(TickSet::Items),
        );
    }
}
