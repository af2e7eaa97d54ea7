//! Placeholder quads for every world entity, kept in step with the
//! simulation's screen coordinates.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::npcs::dialogue::DialogueSession;
use crate::npcs::quests::shows_quest_indicator;
use crate::player::camera::is_on_screen;
use crate::shared::*;
use crate::world::background::{BackgroundSway, BACKGROUND_FRAMES};

// Draw order.
const Z_PLANT: f32 = 1.0;
const Z_CAMPFIRE: f32 = 2.0;
const Z_SCOUTER: f32 = 3.0;
const Z_ITEM: f32 = 4.0;
const Z_MOSQUITO: f32 = 6.0;
const Z_GROUND: f32 = 0.5;

const MARKER_SIZE: f32 = 16.0;

/// The "!" above a Scouter with something new to say.
#[derive(Component, Debug)]
pub struct QuestMarker;

#[derive(Component, Debug)]
pub struct GroundStrip;

/// Converts a screen-space point (y down, origin top-left) to the centred,
/// y-up space of the 2D camera.
pub fn to_camera_space(screen_x: f32, y: f32) -> Vec2 {
    Vec2::new(screen_x - SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - y)
}

fn quad(color: Color, size: Vec2, anchor: Anchor, flip_x: bool) -> Sprite {
    Sprite {
        color,
        custom_size: Some(size),
        anchor,
        flip_x,
        ..default()
    }
}

fn plant_color(kind: PlantKind) -> Color {
    match kind {
        PlantKind::Pine => Color::srgb(0.1, 0.4, 0.2),
        PlantKind::Birch => Color::srgb(0.85, 0.85, 0.75),
        PlantKind::Cotton => Color::srgb(0.95, 0.95, 0.95),
        PlantKind::PortaPotty => Color::srgb(0.2, 0.35, 0.75),
    }
}

pub fn item_color(kind: ItemKind) -> Color {
    match kind {
        ItemKind::Stick => Color::srgb(0.5, 0.35, 0.2),
        ItemKind::Leaf => Color::srgb(0.35, 0.7, 0.25),
        ItemKind::Log => Color::srgb(0.4, 0.25, 0.12),
        ItemKind::BirchBark => Color::srgb(0.9, 0.88, 0.8),
        ItemKind::FlintAndSteel => Color::srgb(0.55, 0.55, 0.6),
        ItemKind::CottonBall => Color::WHITE,
        ItemKind::Racket => Color::srgb(0.9, 0.75, 0.2),
        ItemKind::FishCarcass => Color::srgb(0.6, 0.65, 0.7),
    }
}

fn scouter_color(name: ScouterName) -> Color {
    match name {
        ScouterName::Bryant => Color::srgb(0.75, 0.45, 0.2),
        ScouterName::Hubert => Color::srgb(0.3, 0.55, 0.35),
        ScouterName::Braydon => Color::srgb(0.55, 0.3, 0.55),
    }
}

fn campfire_color(campfire: &Campfire) -> Color {
    if campfire.sparking {
        Color::srgb(1.0, 0.95, 0.6)
    } else if campfire.lit {
        let glow = 0.6 + 0.1 * campfire.ember_frame as f32;
        Color::srgb(1.0, glow * 0.6, 0.1)
    } else {
        Color::srgb(0.35, 0.25, 0.2)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ATTACH
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_ground(mut commands: Commands, existing: Query<(), With<GroundStrip>>) {
    if !existing.is_empty() {
        return;
    }
    let centre = to_camera_space(SCREEN_WIDTH / 2.0, GROUND_Y + GROUND_HEIGHT / 2.0);
    commands.spawn((
        GroundStrip,
        quad(
            Color::srgb(0.3, 0.22, 0.12),
            Vec2::new(SCREEN_WIDTH, GROUND_HEIGHT),
            Anchor::Center,
            false,
        ),
        Transform::from_xyz(centre.x, centre.y, Z_GROUND),
    ));
}

/// Gives freshly spawned simulation entities something to draw.
#[allow(clippy::type_complexity)]
pub fn attach_world_sprites(
    mut commands: Commands,
    plants: Query<(Entity, &Plant, &Footprint), Added<Plant>>,
    campfires: Query<(Entity, &Footprint), Added<Campfire>>,
    items: Query<(Entity, &EnvironmentItem), Added<EnvironmentItem>>,
    mosquitoes: Query<(Entity, &Footprint), Added<Mosquito>>,
    scouters: Query<(Entity, &Scouter, &Footprint), Added<Scouter>>,
) {
    for (entity, plant, footprint) in &plants {
        let size = Vec2::new(footprint.width, footprint.height);
        commands.entity(entity).insert((
            quad(plant_color(plant.kind), size, Anchor::BottomCenter, plant.mirrored),
            Transform::from_xyz(0.0, 0.0, Z_PLANT),
            Visibility::Hidden,
        ));
    }
    for (entity, footprint) in &campfires {
        let size = Vec2::new(footprint.width, footprint.height);
        commands.entity(entity).insert((
            quad(Color::srgb(0.35, 0.25, 0.2), size, Anchor::BottomCenter, false),
            Transform::from_xyz(0.0, 0.0, Z_CAMPFIRE),
            Visibility::Hidden,
        ));
    }
    for (entity, item) in &items {
        commands.entity(entity).insert((
            quad(item_color(item.kind), item.kind.size(), Anchor::BottomCenter, false),
            Transform::from_xyz(0.0, 0.0, Z_ITEM),
            Visibility::Hidden,
        ));
    }
    for (entity, footprint) in &mosquitoes {
        let size = Vec2::new(footprint.width, footprint.height);
        commands.entity(entity).insert((
            quad(Color::srgb(0.15, 0.15, 0.15), size, Anchor::Center, false),
            Transform::from_xyz(0.0, 0.0, Z_MOSQUITO),
            Visibility::Hidden,
        ));
    }
    for (entity, scouter, footprint) in &scouters {
        let size = Vec2::new(footprint.width, footprint.height);
        commands
            .entity(entity)
            .insert((
                quad(scouter_color(scouter.name), size, Anchor::BottomCenter, false),
                Transform::from_xyz(0.0, 0.0, Z_SCOUTER),
                Visibility::Hidden,
            ))
            .with_children(|parent| {
                parent.spawn((
                    QuestMarker,
                    quad(
                        Color::srgb(1.0, 0.85, 0.1),
                        Vec2::new(MARKER_SIZE / 2.0, MARKER_SIZE),
                        Anchor::BottomCenter,
                        false,
                    ),
                    Transform::from_xyz(0.0, footprint.height + 20.0, 0.1),
                    Visibility::Hidden,
                ));
            });
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SYNC
// ═══════════════════════════════════════════════════════════════════════

/// Moves every world quad to its screen position, hiding the ones that
/// are fully off screen.
pub fn sync_world_sprites(
    mut query: Query<(&MapPosition, &ScreenX, &Footprint, &mut Transform, &mut Visibility)>,
) {
    for (pos, screen_x, footprint, mut transform, mut visibility) in &mut query {
        if !is_on_screen(screen_x.0, footprint.width) {
            *visibility = Visibility::Hidden;
            continue;
        }
        *visibility = Visibility::Inherited;
        let at = to_camera_space(screen_x.0, pos.0.y);
        transform.translation.x = at.x;
        transform.translation.y = at.y;
    }
}

pub fn sync_player_sprite(
    player: Res<PlayerState>,
    mut query: Query<(&mut Transform, &mut Sprite), With<Player>>,
) {
    for (mut transform, mut sprite) in &mut query {
        let at = to_camera_space(PLAYER_REL_X, player.position.y);
        transform.translation.x = at.x;
        transform.translation.y = at.y;
        sprite.flip_x = !player.facing_right;
        sprite.color = match player.animator.kind {
            AnimationKind::Swatting => Color::srgb(0.85, 0.3, 0.3),
            AnimationKind::Picking => Color::srgb(0.3, 0.7, 0.4),
            _ => Color::srgb(0.2, 0.45, 0.8),
        };
    }
}

pub fn update_campfire_sprites(mut query: Query<(&Campfire, &mut Sprite), Changed<Campfire>>) {
    for (campfire, mut sprite) in &mut query {
        sprite.color = campfire_color(campfire);
    }
}

pub fn update_quest_markers(
    quest: Res<QuestLine>,
    scouters: Query<(&Scouter, &DialogueSession, &Children)>,
    mut markers: Query<&mut Visibility, With<QuestMarker>>,
) {
    for (scouter, session, children) in &scouters {
        let show = shows_quest_indicator(scouter.name, quest.stage, session);
        for child in children.iter() {
            if let Ok(mut visibility) = markers.get_mut(*child) {
                *visibility = if show {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
            }
        }
    }
}

/// Tints the sky from the background sway frame.
pub fn tint_sky(sway: Res<BackgroundSway>, mut clear: ResMut<ClearColor>) {
    if !sway.is_changed() {
        return;
    }
    let t = sway.frame as f32 / (BACKGROUND_FRAMES - 1) as f32;
    clear.0 = Color::srgb(0.45 + 0.1 * t, 0.65 + 0.1 * t, 0.85 + 0.05 * t);
}
