pub mod animation;
pub mod camera;
pub mod interaction;
pub mod movement;
pub mod spawn;

use bevy::prelude::*;
use crate::shared::*;

use animation::{step_animation, AnimationClips, PlayerCue};
use movement::simulate_body;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationClips>();

        app.add_systems(OnEnter(GameState::Playing), spawn::spawn_player);
        app.add_systems(OnEnter(GameState::Paused), interaction::clear_held_input);

        app.add_systems(
            FixedUpdate,
            (interaction::apply_player_input, advance_player)
                .chain()
                .in_set(TickSet::Player),
        );
        app.add_systems(
            FixedUpdate,
            camera::reposition_camera.in_set(TickSet::Camera),
        );
        app.add_systems(
            FixedUpdate,
            camera::place_new_entities
                .after(TickSet::Persistence)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// One tick of the player: body physics and pools, knock-out respawn, then
/// the active animation and whatever world interaction its frame requests.
#[allow(clippy::too_many_arguments)]
pub fn advance_player(
    mut player: ResMut<PlayerState>,
    mut inventory: ResMut<Inventory>,
    clips: Res<AnimationClips>,
    quest: Res<QuestLine>,
    mut camera: ResMut<CameraShift>,
    mut stats: ResMut<SessionStats>,
    mut rng: ResMut<SimRng>,
    mut drops: EventWriter<ItemDropEvent>,
    mut swats: EventWriter<SwatEvent>,
    mut pickups: EventWriter<PickupEvent>,
    mut quest_events: EventWriter<QuestAdvanceEvent>,
) {
    let report = simulate_body(&mut player, &inventory);

    stats.distance += report.distance as u64;
    if report.moved {
        camera.dirty = true;
    }
    if report.past_porta_potty && quest.stage == QUEST_FIND_PORTA_POTTY {
        quest_events.send(QuestAdvanceEvent::from_stage(QUEST_FIND_PORTA_POTTY));
    }

    if report.died {
        let scattered = spawn::respawn(&mut player, &mut inventory, &mut rng.0);
        info!(
            "[Player] Knocked out; respawning with {} item(s) left behind",
            scattered.len()
        );
        for (kind, position) in scattered {
            drops.send(ItemDropEvent {
                kind,
                position,
                source: None,
            });
        }
        camera.dirty = true;
    }

    let racket_selected = inventory.selected_kind() == Some(ItemKind::Racket);
    match step_animation(&mut player, &clips, racket_selected) {
        Some(PlayerCue::Swat) => {
            swats.send(SwatEvent {
                origin: player.torso(),
                facing_right: player.facing_right,
            });
        }
        Some(PlayerCue::Pickup) => {
            pickups.send(PickupEvent);
        }
        None => {}
    }
}
