//! The linear quest line: advancing it, routing Scouter interactions to
//! their sessions, and applying script completion effects.

use std::ops::DerefMut;

use bevy::prelude::*;
use crate::shared::*;

use super::dialogue::DialogueSession;
use super::scripts::{choose_script, quest_speaker, ScriptEffect};

/// Moves the quest line forward by one and silences every session.
/// Saturates at the final stage; returns whether the stage changed.
pub fn next_quest_line<S>(quest: &mut QuestLine, sessions: impl IntoIterator<Item = S>) -> bool
where
    S: DerefMut<Target = DialogueSession>,
{
    if quest.stage >= FINAL_QUEST_STAGE {
        return false;
    }
    quest.stage += 1;
    for mut session in sessions {
        session.reset();
    }
    true
}

/// Whether a Scouter shows the quest marker: it is the current speaker and
/// has nothing to say yet.
pub fn shows_quest_indicator(name: ScouterName, stage: u8, session: &DialogueSession) -> bool {
    quest_speaker(stage.min(FINAL_QUEST_STAGE)) == name && session.is_silent()
}

/// Where a Scouter drops a grant the player can't carry.
pub fn grant_drop_point(scouter: Vec2, footprint: &Footprint) -> Vec2 {
    Vec2::new(scouter.x, scouter.y - footprint.height + footprint.height / 4.0)
}

fn apply_completion(
    effect: ScriptEffect,
    name: ScouterName,
    drop_at: Vec2,
    player: &mut PlayerState,
    inventory: &mut Inventory,
    drops: &mut EventWriter<ItemDropEvent>,
    quest_events: &mut EventWriter<QuestAdvanceEvent>,
) {
    if let Some(kind) = effect.grant {
        if give_item(player, inventory, kind) {
            info!("[Quest] {} gave the player a {}", name.display_name(), kind.display_name());
        } else {
            info!("[Quest] {} dropped a {} (inventory full)", name.display_name(), kind.display_name());
            drops.send(ItemDropEvent {
                kind,
                position: drop_at,
                source: None,
            });
        }
    }
    if let Some(stage) = effect.advance_from {
        quest_events.send(QuestAdvanceEvent::from_stage(stage));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Systems
// ═══════════════════════════════════════════════════════════════════════════

/// Forwards the player's interactions to each Scouter's session.
#[allow(clippy::too_many_arguments)]
pub fn handle_scouter_interactions(
    mut events: EventReader<ScouterInteractEvent>,
    quest: Res<QuestLine>,
    mut scouters: Query<(&Scouter, &mut DialogueSession, &MapPosition, &Footprint)>,
    mut player: ResMut<PlayerState>,
    mut inventory: ResMut<Inventory>,
    mut drops: EventWriter<ItemDropEvent>,
    mut quest_events: EventWriter<QuestAdvanceEvent>,
) {
    for event in events.read() {
        let Ok((scouter, mut session, pos, footprint)) = scouters.get_mut(event.scouter) else {
            continue;
        };
        let start = choose_script(scouter.name, quest.stage);
        if let Some(done) = session.interact(start) {
            apply_completion(
                done.completion(),
                scouter.name,
                grant_drop_point(pos.0, footprint),
                &mut player,
                &mut inventory,
                &mut drops,
                &mut quest_events,
            );
        }
    }
}

/// Ticks every session's typewriter and line pause.
pub fn tick_dialogue(
    mut scouters: Query<(&Scouter, &mut DialogueSession, &MapPosition, &Footprint)>,
    mut player: ResMut<PlayerState>,
    mut inventory: ResMut<Inventory>,
    mut drops: EventWriter<ItemDropEvent>,
    mut quest_events: EventWriter<QuestAdvanceEvent>,
) {
    for (scouter, mut session, pos, footprint) in &mut scouters {
        if let Some(done) = session.tick() {
            apply_completion(
                done.completion(),
                scouter.name,
                grant_drop_point(pos.0, footprint),
                &mut player,
                &mut inventory,
                &mut drops,
                &mut quest_events,
            );
        }
    }
}

/// Applies advance requests raised this tick. Each request only counts
/// while the line still sits at the stage it was raised for.
pub fn apply_quest_advances(
    mut events: EventReader<QuestAdvanceEvent>,
    mut quest: ResMut<QuestLine>,
    mut sessions: Query<&mut DialogueSession>,
) {
    for event in events.read() {
        if let Some(expected) = event.expected_stage {
            if expected != quest.stage {
                continue;
            }
        }
        if next_quest_line(&mut quest, sessions.iter_mut()) {
            info!("[Quest] Quest line advanced to stage {}", quest.stage);
        }
    }
}
