mod hud;
mod menus;
mod world_sprites;

use bevy::prelude::*;
use crate::shared::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.5, 0.7, 0.88)));

        // ─── MAIN MENU ───
        app.add_systems(OnEnter(GameState::MainMenu), menus::spawn_main_menu);
        app.add_systems(OnExit(GameState::MainMenu), menus::despawn_main_menu);

        // ─── WORLD + HUD — spawned once, kept across pauses ───
        app.add_systems(
            OnEnter(GameState::Playing),
            (world_sprites::spawn_ground, hud::spawn_hud),
        );

        // ─── PAUSE SCREEN ───
        app.add_systems(
            OnEnter(GameState::Paused),
            menus::spawn_pause_menu.after(crate::save::record_and_save_scores),
        );
        app.add_systems(OnExit(GameState::Paused), menus::despawn_pause_menu);

        // ─── SPRITE SYNC ───
        app.add_systems(
            Update,
            (
                world_sprites::attach_world_sprites,
                (
                    world_sprites::sync_world_sprites,
                    world_sprites::sync_player_sprite,
                    world_sprites::update_campfire_sprites,
                    world_sprites::update_quest_markers,
                    world_sprites::tint_sky,
                ),
            )
                .chain()
                .run_if(in_state(GameState::Playing).or(in_state(GameState::Paused))),
        );

        // ─── HUD UPDATES ───
        app.add_systems(
            Update,
            (
                hud::update_pool_bars,
                hud::update_status_text,
                hud::update_hotbar,
                hud::update_campfire_panel,
                hud::update_dialogue_panel,
            )
                .run_if(in_state(GameState::Playing)),
        );
    }
}
