mod shared;
mod input;
mod player;
mod world;
mod npcs;
mod economy;
mod mosquitoes;
mod ui;
mod save;
mod data;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Camp Haliburton".into(),
                    resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                    present_mode: PresentMode::AutoVsync,
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
        )
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<PlayerState>()
        .init_resource::<Inventory>()
        .init_resource::<QuestLine>()
        .init_resource::<SessionStats>()
        .init_resource::<CameraShift>()
        .init_resource::<SimRng>()
        .init_resource::<GameConfig>()
        .init_resource::<PlayerInput>()
        .init_resource::<KeyBindings>()
        // Events
        .add_event::<QuestAdvanceEvent>()
        .add_event::<SwatEvent>()
        .add_event::<PickupEvent>()
        .add_event::<ItemDropEvent>()
        .add_event::<CampfireActionEvent>()
        .add_event::<ScouterInteractEvent>()
        // Domain plugins
        .add_plugins(input::InputPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(economy::EconomyPlugin)
        .add_plugins(mosquitoes::MosquitoPlugin)
        .add_plugins(npcs::NpcPlugin)
        .add_plugins(save::SavePlugin)
        .add_plugins(ui::UiPlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
