use bevy::prelude::*;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════════
// Held keys
// ═══════════════════════════════════════════════════════════════════════════

/// Applies a key-down to the controller. A swat press is ignored unless
/// the selected item is a Racket.
pub fn press_key(player: &mut PlayerState, key: HeldKey, racket_selected: bool) {
    match key {
        HeldKey::Left | HeldKey::Right => {
            if key == HeldKey::Left {
                player.keys.left = true;
                player.facing_right = false;
            } else {
                player.keys.right = true;
                player.facing_right = true;
            }
            player.motion.walking = true;
            if player.keys.sprint {
                player.motion.running = true;
            }
        }
        HeldKey::Jump => player.keys.jump = true,
        HeldKey::Swat => {
            if racket_selected {
                player.keys.swat = true;
                player.motion.picking = false;
                player.motion.jumping = false;
            }
        }
        HeldKey::Sprint => {
            player.keys.sprint = true;
            if player.keys.left || player.keys.right {
                player.motion.running = true;
            }
        }
    }
}

pub fn release_key(player: &mut PlayerState, key: HeldKey) {
    match key {
        HeldKey::Left | HeldKey::Right => {
            if key == HeldKey::Left {
                player.keys.left = false;
            } else {
                player.keys.right = false;
            }
            if !player.keys.left && !player.keys.right {
                player.motion.walking = false;
                player.motion.running = false;
            }
        }
        HeldKey::Jump => player.keys.jump = false,
        HeldKey::Swat => player.keys.swat = false,
        HeldKey::Sprint => {
            player.keys.sprint = false;
            player.motion.running = false;
        }
    }
}

/// Starts the pick animation. Blocked mid-swat; a press during a pick
/// leaves the running clip alone.
pub fn start_picking(player: &mut PlayerState) {
    if player.motion.swatting || player.motion.picking {
        return;
    }
    player.motion.picking = true;
    player.motion.jumping = false;
    player.animator = Animator::start(AnimationKind::Picking);
}

/// Where a dropped item appears relative to the player's feet.
pub fn drop_point(player: &PlayerState) -> Vec2 {
    Vec2::new(player.position.x, player.position.y - PLAYER_HEIGHT * 3.0 / 4.0)
}

// ═══════════════════════════════════════════════════════════════════════════
// Input system
// ═══════════════════════════════════════════════════════════════════════════

/// Drains the gathered input and turns it into controller state and world
/// requests: slot selection, dropping, interaction and the developer
/// quest hotkey.
#[allow(clippy::too_many_arguments)]
pub fn apply_player_input(
    mut input: ResMut<PlayerInput>,
    mut player: ResMut<PlayerState>,
    mut inventory: ResMut<Inventory>,
    quest: Res<QuestLine>,
    items: Query<(&MapPosition, &EnvironmentItem)>,
    campfires: Query<(Entity, &MapPosition, &Footprint), With<Campfire>>,
    scouters: Query<(Entity, &MapPosition, &Footprint), With<Scouter>>,
    mut drops: EventWriter<ItemDropEvent>,
    mut campfire_actions: EventWriter<CampfireActionEvent>,
    mut scouter_talks: EventWriter<ScouterInteractEvent>,
    mut quest_events: EventWriter<QuestAdvanceEvent>,
) {
    if input.is_empty() {
        return;
    }
    let input = std::mem::take(&mut *input);

    for (key, down) in input.transitions {
        if down {
            let racket = inventory.selected_kind() == Some(ItemKind::Racket);
            press_key(&mut player, key, racket);
        } else {
            release_key(&mut player, key);
        }
    }

    if let Some(slot) = input.slot {
        inventory.select(slot);
    }

    if input.drop {
        if let Some(kind) = inventory.remove_selected() {
            drops.send(ItemDropEvent {
                kind,
                position: drop_point(&player),
                source: None,
            });
            if kind == ItemKind::FishCarcass
                && player.position.x <= DOCK_EDGE_X
                && quest.stage == QUEST_DELIVER_FISH
            {
                quest_events.send(QuestAdvanceEvent::from_stage(QUEST_DELIVER_FISH));
            }
        }
    }

    if input.interact && !player.motion.swatting {
        let drop_nearby = items
            .iter()
            .any(|(pos, item)| in_pickup_range(&player, pos.0, item.kind.size().x));

        if drop_nearby {
            start_picking(&mut player);
        } else {
            let mut interacted = false;

            for (entity, pos, footprint) in &campfires {
                if !within_reach(player.position.x, pos.0.x, footprint.width) {
                    continue;
                }
                interacted = true;
                match inventory.selected_kind() {
                    Some(kind) if kind.campfire_valid() => {
                        inventory.remove_selected();
                        campfire_actions.send(CampfireActionEvent {
                            campfire: entity,
                            action: CampfireAction::Feed(kind),
                        });
                    }
                    Some(ItemKind::FlintAndSteel) => {
                        campfire_actions.send(CampfireActionEvent {
                            campfire: entity,
                            action: CampfireAction::Light,
                        });
                    }
                    _ => {}
                }
            }

            for (entity, pos, footprint) in &scouters {
                if within_reach(player.position.x, pos.0.x, footprint.width) {
                    interacted = true;
                    scouter_talks.send(ScouterInteractEvent { scouter: entity });
                }
            }

            if !interacted {
                start_picking(&mut player);
            }
        }
    }

    if input.quest_advance {
        quest_events.send(QuestAdvanceEvent {
            expected_stage: None,
        });
    }
}

/// Drops held keys and movement flags, e.g. when the game is paused.
pub fn clear_held_input(mut player: ResMut<PlayerState>, mut input: ResMut<PlayerInput>) {
    player.keys = HeldKeys::default();
    player.motion = MotionFlags::default();
    *input = PlayerInput::default();
}
